//! Exit code constants for the ninjagen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, target already exists)
//! - 2: Manifest error (unreadable, invalid values, unresolvable variables)
//! - 3: Write failure (project files or build file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid target state.
pub const USER_ERROR: i32 = 1;

/// Manifest could not be loaded or produced an invalid build file.
pub const CONFIG_ERROR: i32 = 2;

/// Filesystem or sink failure while writing output.
pub const WRITE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_ERROR, WRITE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
