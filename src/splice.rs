//! Span replacement in destination files.
//!
//! Both transformations walk the destination line by line. Lines outside a
//! begin/end span are copied byte-for-byte; lines inside a span are
//! replaced.
//!
//! * [`inject_code`] keeps the marker lines and fills the span with a fenced
//!   code block holding the file named by the begin marker.
//! * [`substitute_fragments`] swaps the whole span, markers included, for a
//!   fragment captured by [`crate::fragments::extract_fragments`].

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, SpliceError};
use crate::fragments::FragmentMap;
use crate::language::LanguageTable;
use crate::marker::Marker;

const FENCE: &str = "```";

/// Supplies the contents of files named by begin markers.
pub trait CodeSource {
    fn load(&self, name: &str) -> Result<String>;
}

/// Reads code files relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsCodeSource {
    root: PathBuf,
}

impl FsCodeSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CodeSource for FsCodeSource {
    fn load(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        log::debug!("Reading code file {}", path.display());
        fs::read_to_string(&path).map_err(|e| SpliceError::io(path, e))
    }
}

impl<F> CodeSource for F
where
    F: Fn(&str) -> Result<String>,
{
    fn load(&self, name: &str) -> Result<String> {
        self(name)
    }
}

/// Fill every span of `template` with a fenced code block.
///
/// The begin and end lines are kept so the result can be spliced again
/// later. The fence language comes from the extension of the file named by
/// the begin marker; an unregistered extension aborts with
/// [`SpliceError::UnknownLanguage`].
pub fn inject_code(template: &str, languages: &LanguageTable, code: &impl CodeSource) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut open: Option<(&str, usize)> = None;

    for (index, line) in template.split_inclusive('\n').enumerate() {
        match Marker::parse(line, index + 1)? {
            Marker::Begin(name) => {
                ensure_closed(open)?;
                let eol = line_ending(line);
                let language = languages.for_file(name)?;
                let contents = code.load(name)?;
                log::debug!("Injecting {name} as {language} ({} bytes)", contents.len());

                out.push_str(line);
                if !line.ends_with('\n') {
                    out.push_str(eol);
                }
                out.push_str(FENCE);
                out.push_str(language);
                out.push_str(eol);
                out.push_str(&contents);
                if !contents.is_empty() && !contents.ends_with('\n') {
                    out.push_str(eol);
                }
                out.push_str(FENCE);
                out.push_str(eol);
                open = Some((name, index + 1));
            }
            Marker::End(_) => {
                out.push_str(line);
                open = None;
            }
            Marker::Text if open.is_none() => out.push_str(line),
            Marker::Text => {}
        }
    }

    ensure_closed(open)?;
    Ok(out)
}

/// Replace every span of `template` with the fragment of the same name.
///
/// The template's own marker lines are dropped together with the span
/// contents; the fragment brings its own. A name missing from `fragments`
/// aborts with [`SpliceError::MissingFragment`].
pub fn substitute_fragments(template: &str, fragments: &FragmentMap) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut open: Option<(&str, usize)> = None;

    for (index, line) in template.split_inclusive('\n').enumerate() {
        match Marker::parse(line, index + 1)? {
            Marker::Begin(name) => {
                ensure_closed(open)?;
                let fragment = fragments.get(name).ok_or_else(|| SpliceError::MissingFragment {
                    name: name.to_string(),
                })?;
                log::debug!("Substituting fragment '{name}' ({} bytes)", fragment.len());
                out.push_str(fragment);
                open = Some((name, index + 1));
            }
            Marker::End(_) if open.is_some() => {
                // Keep the following line on its own line
                if line.ends_with('\n') && !out.ends_with('\n') {
                    out.push_str(line_ending(line));
                }
                open = None;
            }
            Marker::End(_) => out.push_str(line),
            Marker::Text if open.is_none() => out.push_str(line),
            Marker::Text => {}
        }
    }

    ensure_closed(open)?;
    Ok(out)
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") { "\r\n" } else { "\n" }
}

/// A span must be closed before the next begin marker and before EOF.
fn ensure_closed(open: Option<(&str, usize)>) -> Result<()> {
    match open {
        Some((name, line)) => Err(SpliceError::UnterminatedSpan {
            name: name.to_string(),
            line,
        }),
        None => Ok(()),
    }
}
