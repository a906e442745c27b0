//! Capture of named fragments from a rendered source file.

use std::collections::BTreeMap;

use crate::error::{Result, SpliceError};
use crate::marker::Marker;

/// Fragment name -> captured text, including the begin and end marker lines.
pub type FragmentMap = BTreeMap<String, String>;

/// Collect every begin/end span of `source`.
///
/// Each fragment keeps its own marker lines and the original line
/// terminators, so it can be pasted verbatim into a template. A name seen
/// twice keeps the later span. A begin marker inside an open span, or a span
/// still open at the end of the input, is [`SpliceError::UnterminatedSpan`].
pub fn extract_fragments(source: &str) -> Result<FragmentMap> {
    let mut fragments = FragmentMap::new();
    let mut current: Option<(&str, usize, String)> = None;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let marker = Marker::parse(line, index + 1)?;

        if let Marker::Begin(name) = marker {
            if let Some((open, begin_line, _)) = current {
                return Err(unterminated(open, begin_line));
            }
            current = Some((name, index + 1, String::new()));
        }

        if let Some((_, _, buffer)) = current.as_mut() {
            buffer.push_str(line);
        }

        if marker.is_end()
            && let Some((name, _, buffer)) = current.take()
        {
            log::debug!("Captured fragment '{name}' ({} bytes)", buffer.len());
            if fragments.insert(name.to_string(), buffer).is_some() {
                log::warn!("Fragment '{name}' is defined more than once; keeping the last one");
            }
        }
    }

    match current {
        Some((name, line, _)) => Err(unterminated(name, line)),
        None => Ok(fragments),
    }
}

fn unterminated(name: &str, line: usize) -> SpliceError {
    SpliceError::UnterminatedSpan {
        name: name.to_string(),
        line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RENDERED: &str = "<html>\n<body>\n<!-- begin what-is-embly -->\n<h1>What is Embly?</h1>\n<p>Embly is a platform.</p>\n<!-- end what-is-embly -->\n<footer></footer>\n<!-- begin nav -->\n<nav></nav>\n<!-- end -->\n</body>\n</html>\n";

    #[test]
    fn test_fragments_include_marker_lines() {
        let fragments = extract_fragments(RENDERED).unwrap();

        assert_eq!(
            fragments["what-is-embly"],
            "<!-- begin what-is-embly -->\n<h1>What is Embly?</h1>\n<p>Embly is a platform.</p>\n<!-- end what-is-embly -->\n"
        );
        assert_eq!(fragments["nav"], "<!-- begin nav -->\n<nav></nav>\n<!-- end -->\n");
    }

    #[test]
    fn test_names_match_markers() {
        let fragments = extract_fragments(RENDERED).unwrap();
        let names: Vec<&str> = fragments.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["nav", "what-is-embly"]);
    }

    #[test]
    fn test_no_markers() {
        let fragments = extract_fragments("<p>plain</p>\n").unwrap();
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_duplicate_name_keeps_last() {
        let source = "<!-- begin a -->\none\n<!-- end -->\n<!-- begin a -->\ntwo\n<!-- end -->\n";
        let fragments = extract_fragments(source).unwrap();

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments["a"], "<!-- begin a -->\ntwo\n<!-- end -->\n");
    }

    #[test]
    fn test_unterminated_fragment_is_an_error() {
        let source = "<!-- begin a -->\none\n<!-- end -->\n<!-- begin b -->\ndangling\n";
        let err = extract_fragments(source).unwrap_err();

        assert!(matches!(err, SpliceError::UnterminatedSpan { ref name, line: 4 } if name == "b"));
        assert_eq!(err.to_string(), "begin marker 'b' on line 4 has no matching end marker");
    }

    #[test]
    fn test_nested_begin_is_an_error() {
        let source = "<!-- begin outer -->\n<!-- begin inner -->\n<!-- end -->\n";
        let err = extract_fragments(source).unwrap_err();
        assert!(matches!(err, SpliceError::UnterminatedSpan { ref name, line: 1 } if name == "outer"));
    }

    #[test]
    fn test_crlf_is_preserved() {
        let source = "<!-- begin a -->\r\nbody\r\n<!-- end -->\r\n";
        let fragments = extract_fragments(source).unwrap();
        assert_eq!(fragments["a"], source);
    }

    #[test]
    fn test_final_line_without_newline() {
        let source = "<!-- begin a -->\nbody\n<!-- end -->";
        let fragments = extract_fragments(source).unwrap();
        assert_eq!(fragments["a"], source);
    }

    #[test]
    fn test_unnamed_begin_is_an_error() {
        assert!(extract_fragments("<!-- begin -->\nx\n<!-- end -->\n").is_err());
    }
}
