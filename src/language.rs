//! Fence language lookup by file extension.
//!
//! Injected files get a fenced code block tagged with a language chosen from
//! their extension. The built-in table is intentionally small; projects can
//! register more extensions in the `[languages]` section of the config file.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::SpliceError;

/// Built-in extension -> fence language map.
static BUILTIN_LANGUAGES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("toml", "toml");
    m.insert("rs", "rust");
    m.insert("hcl", "hcl");
    m
});

/// Resolver from file names to fence languages.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    builtin: &'static HashMap<&'static str, &'static str>,
    /// Extensions registered by the configuration, keyed lowercase
    extra: BTreeMap<String, String>,
}

impl LanguageTable {
    /// Create a table containing only the built-in extensions.
    pub fn new() -> Self {
        Self {
            builtin: &BUILTIN_LANGUAGES,
            extra: BTreeMap::new(),
        }
    }

    /// Create a table with additional (or overriding) extension mappings.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (extension, language) in overrides {
            table.register(extension.as_ref(), language);
        }
        table
    }

    /// Register `extension` (with or without a leading dot).
    pub fn register(&mut self, extension: &str, language: impl Into<String>) {
        let key = extension.trim_start_matches('.').to_ascii_lowercase();
        self.extra.insert(key, language.into());
    }

    /// Fence language for a bare extension, if registered.
    pub fn for_extension(&self, extension: &str) -> Option<&str> {
        let lower = extension.to_ascii_lowercase();
        self.extra
            .get(&lower)
            .map(String::as_str)
            .or_else(|| self.builtin.get(lower.as_str()).copied())
    }

    /// Fence language for the file named in a begin marker.
    ///
    /// The extension is whatever follows the last `.` of the file name. A
    /// name without an extension fails just like an unregistered one.
    pub fn for_file(&self, file: &str) -> Result<&str, SpliceError> {
        let file_name = Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file);
        let extension = file_name.rsplit_once('.').map_or("", |(_, ext)| ext);

        self.for_extension(extension).ok_or_else(|| SpliceError::UnknownLanguage {
            file: file.to_string(),
            extension: extension.to_string(),
        })
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new()
    }
}
