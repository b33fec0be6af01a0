/// Uniform randomness port for the weighted tier draw.
///
/// Injected so tier selection is deterministic under test.
pub trait RandomSource: Send + Sync {
    /// A uniform value in `[0, 1)`.
    fn next(&self) -> f64;
}
