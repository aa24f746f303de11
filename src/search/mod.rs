pub mod constants;
mod config;
mod core;
mod errors;

pub use config::SearchConfig;
pub use core::CombinationSearch;
pub use errors::SearchError;

#[cfg(test)]
mod tests;
