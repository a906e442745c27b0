//! Splice example sources and pre-rendered HTML into documentation.
//!
//! Destination files mark the spans to fill with HTML comments:
//!
//! ```text
//! <!-- begin hello.rs -->
//! <!-- end -->
//! ```
//!
//! [`inject_code`] fills each span with a fenced code block holding the named
//! file; [`substitute_fragments`] replaces each span with the fragment of the
//! same name captured from a rendered page by [`extract_fragments`].

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod file_processor;
pub mod fragments;
pub mod jobs;
pub mod language;
pub mod marker;
pub mod splice;

pub use config::{Config, ConfigError};
pub use error::{Result, SpliceError};
pub use file_processor::{FileOutcome, WriteMode, process_file};
pub use fragments::{FragmentMap, extract_fragments};
pub use jobs::{copy_fragments, inject_files, run_config};
pub use language::LanguageTable;
pub use marker::Marker;
pub use splice::{CodeSource, FsCodeSource, inject_code, substitute_fragments};
