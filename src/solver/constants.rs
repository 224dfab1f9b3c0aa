// Tuning constants for the chunked strategy

/// Bucket width used when the input has at most [`DEFAULT_RANGE_THRESHOLD`] elements
pub const DEFAULT_SMALL_RANGE: usize = 15;

/// Bucket width used above [`DEFAULT_RANGE_THRESHOLD`] elements
pub const DEFAULT_LARGE_RANGE: usize = 35;

/// Largest input size that still uses the small bucket width
pub const DEFAULT_RANGE_THRESHOLD: usize = 100;

/// Largest input handled by the push-two-then-sort-three strategy
pub const SMALL_STRATEGY_MAX: usize = 5;
