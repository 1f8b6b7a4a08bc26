pub mod codec;
pub mod tree;
