/// Minutes in one calendar day; timed offsets run from 0 up to this value.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Width of the column bitmask. Events beyond this many concurrent columns
/// share the last column.
pub const MAX_COLUMNS: usize = 64;

/// Julian day number of 1970-01-01.
pub const EPOCH_JULIAN_DAY: i32 = 2_440_588;
