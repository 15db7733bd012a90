//! Exit code constants for the resumeforge CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, rejected edit)
//! - 2: Schema violation (the document does not satisfy the resume schema)
//! - 3: Storage failure (resume file missing, unreadable, malformed or unwritable)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or an edit that was rejected
/// (unknown id, empty input, out-of-range index, duplicate skill).
pub const USER_ERROR: i32 = 1;

/// Schema violation: the document on disk, or the document about to be
/// written, failed validation.
pub const SCHEMA_VIOLATION: i32 = 2;

/// Storage failure: the resume document could not be read or written.
pub const STORAGE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, SCHEMA_VIOLATION, STORAGE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(SCHEMA_VIOLATION, 2);
        assert_eq!(STORAGE_FAILURE, 3);
    }
}
