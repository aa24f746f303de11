mod core;

pub use core::{CombinationIterator, iter_combinations};
