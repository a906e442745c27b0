/// Exit codes for mdsplice, following the same convention as Markdown linters
///
/// These exit codes allow build scripts and CI to tell a stale
/// documentation tree apart from a broken run.
/// Success - Every file was spliced (or was already up to date)
pub const SUCCESS: i32 = 0;

/// Files out of date - `--check` found files that would change
pub const CHANGES_NEEDED: i32 = 1;

/// Tool error - Missing file, unknown language, missing fragment or bad config
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{CHANGES_NEEDED, TOOL_ERROR};

    /// Exit with changes needed code (1)
    pub fn changes_needed() -> ! {
        std::process::exit(CHANGES_NEEDED);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
