//! Unified exit codes. Part of the public contract for scripting runs.

pub const SUCCESS: i32 = 0;
pub const RUN_FAILED: i32 = 1; // A strategy failed under the stop policy
pub const CONFIG_ERROR: i32 = 2; // Bad config, dataset or environment
