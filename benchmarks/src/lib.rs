/// Point counts used by the runtime benchmarks.
///
/// The enumeration is O(n⁴), keep these small.
pub const BENCH_POINT_COUNTS: [usize; 3] = [30, 60, 120];
