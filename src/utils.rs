use std::ops::Neg;

use crate::Weight;

/// Shannon entropy, in bits per symbol, of the distribution described by the
/// given frequencies. Zero-frequency entries are skipped.
pub fn entropy(distr: &[Weight], total_freq: f64) -> f64 {
    let mut entropy = 0.0;

    for freq in distr {
        if *freq == 0 {
            continue;
        }
        let pr = *freq as f64 / total_freq;
        entropy += pr * f64::log2(pr);
    }
    entropy.neg()
}
