/// Configuration for the combination search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fan out the first digit across the rayon thread pool.
    pub parallel: bool,
}
