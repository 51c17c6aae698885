/// Number of samples in the generated lookup table (one full sine period)
pub const TABLE_SIZE: usize = 256;

/// Largest table size accepted on the command line
pub const MAX_TABLE_SIZE: usize = 1 << 16;

/// Log level (overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "warn";

/// Name of the emitted C array
pub const ARRAY_NAME: &str = "sine_wave";

/// Element type written in the array declaration
pub const ELEMENT_TYPE: &str = "float";

// ============================================================================
// Q1.15 fixed point
// ============================================================================

/// Full-scale value of a Q1.15 sample (INT16_MAX)
pub const Q1X15_SCALE: i16 = i16::MAX;

/// Bytes per packed sample (little-endian i16)
pub const BYTES_PER_SAMPLE: usize = 2;
