/*
 * Utility functions and consts used by the tests.
 *
 */

use rand::prelude::{Distribution, SmallRng};
use rand::SeedableRng;
use rand_distr::Zipf;

/// Size of the random sequences used by the round-trip tests.
pub const SYMBOL_LIST_LENGTH: usize = 10_000;

/// Size of the alphabet the zipfian distribution samples from.
const ALPHABET_SIZE: u64 = 26;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a sequence of [`SYMBOL_LIST_LENGTH`] lowercase letters sampled
/// from a Zipfian distribution, so frequencies are heavily skewed the way
/// real text is.
pub fn get_symbols(seed: u64) -> Vec<char> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Zipf::new(ALPHABET_SIZE, 1.0).unwrap();
    let mut symbols = Vec::with_capacity(SYMBOL_LIST_LENGTH);

    for _ in 0..SYMBOL_LIST_LENGTH {
        let rank = distribution.sample(&mut rng) as u8;
        symbols.push((b'a' + rank - 1) as char);
    }
    symbols
}
