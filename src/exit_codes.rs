//! Process exit codes of the `catpack` binary.

pub const SUCCESS: i32 = 0;
/// Missing source directory or input file, or an entry name that was rejected.
pub const INVALID_INPUT: i32 = 1;
/// Reading or writing an individual file failed.
pub const IO_FAILURE: i32 = 2;
