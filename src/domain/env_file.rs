//! Flat `KEY=VALUE` environment files.

use std::fmt;

/// One environment file: a target path and its ordered entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    path: String,
    entries: Vec<(&'static str, String)>,
}

impl EnvFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), entries: Vec::new() }
    }

    /// Append an entry. Entries render in insertion order.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((key, value.into()));
        self
    }

    /// Path relative to the project root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File content: one `KEY=VALUE` line per entry, each newline-terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EnvFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
