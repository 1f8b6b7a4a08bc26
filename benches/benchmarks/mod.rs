pub mod codec;

/// Size of the list of symbols used to bench.
const SYMBOL_LIST_LENGTH: usize = 500_000;

/// Size of the alphabet the zipfian distribution samples from.
const ALPHABET_SIZE: u64 = 64;
