//! Command handlers for the mdsplice CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod completions;
pub mod copy;
pub mod init;
pub mod inject;
pub mod run;
