//! Testability port for injecting randomness.

/// Supplies seeds for per-call random generators.
///
/// Every attack or battle seeds its own generator from one call to
/// `next_seed`, so concurrent fights never share random state.
pub trait RandomPort: Send + Sync {
    fn next_seed(&self) -> u64;
}
