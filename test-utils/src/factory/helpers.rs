//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// Starts well above zero so generated values are always valid Discord snowflakes.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(100_000);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
