use rfr_common::error::RfrError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const USAGE: i32 = 2;

/// Exit status for an error that stopped startup.
pub fn for_error(err: &RfrError) -> i32 {
    match err {
        RfrError::HelpRequested(_) => SUCCESS,
        e if e.is_usage_error() => USAGE,
        _ => FAILURE,
    }
}
