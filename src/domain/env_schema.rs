//! The fixed set of configuration keys the operator is prompted for.

pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const LOCAL_IP: &str = "LOCAL_IP";
pub const BACKEND_PORT: &str = "BACKEND_PORT";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASS: &str = "DB_PASS";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_PORT: &str = "DB_PORT";
pub const POSTGRES_HOST_AUTH_METHOD: &str = "POSTGRES_HOST_AUTH_METHOD";

/// One promptable key and its pre-prompt default. An empty default means "no default".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub key: &'static str,
    pub default: String,
}

impl SchemaEntry {
    fn new(key: &'static str, default: &str) -> Self {
        Self { key, default: default.to_string() }
    }

    pub fn has_default(&self) -> bool {
        !self.default.is_empty()
    }

    /// Prompt text without the trailing colon.
    pub fn prompt_label(&self) -> String {
        if self.has_default() {
            format!("Enter value for {} [{}]", self.key, self.default)
        } else {
            format!("Enter value for {} (no default)", self.key)
        }
    }

    /// Resolve one line of operator input against this entry's default.
    pub fn resolve(&self, answer: &str) -> String {
        let trimmed = answer.trim();
        if trimmed.is_empty() { self.default.clone() } else { trimmed.to_string() }
    }
}

/// Ordered schema of every recognised configuration key.
///
/// Insertion order is prompt order. The schema is never mutated in place;
/// [`EnvSchema::with_default`] returns a new schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSchema {
    entries: Vec<SchemaEntry>,
}

impl EnvSchema {
    /// The MapMe schema with its built-in defaults.
    pub fn mapme() -> Self {
        Self {
            entries: vec![
                SchemaEntry::new(SPOTIFY_CLIENT_ID, ""),
                SchemaEntry::new(SPOTIFY_CLIENT_SECRET, ""),
                SchemaEntry::new(LOCAL_IP, ""),
                SchemaEntry::new(BACKEND_PORT, "8888"),
                SchemaEntry::new(DB_USER, "admin"),
                SchemaEntry::new(DB_PASS, "admin"),
                SchemaEntry::new(DB_HOST, "mapme-db"),
                SchemaEntry::new(DB_NAME, "music_map_db"),
                SchemaEntry::new(DB_PORT, "5432"),
                SchemaEntry::new(POSTGRES_HOST_AUTH_METHOD, "md5"),
            ],
        }
    }

    /// Return a copy with `key`'s default replaced. Unknown keys leave the schema unchanged.
    pub fn with_default(&self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                if entry.key == key {
                    SchemaEntry { key: entry.key, default: value.clone() }
                } else {
                    entry.clone()
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn default_for(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.key == key).map(|entry| entry.default.as_str())
    }

    /// Resolve every key to its default without prompting.
    pub fn defaults(&self) -> ResolvedConfig {
        ResolvedConfig::from_pairs(
            self.entries.iter().map(|entry| (entry.key, entry.default.clone())).collect(),
        )
    }
}

/// Values for every schema key after operator interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    values: Vec<(&'static str, String)>,
}

impl ResolvedConfig {
    pub fn from_pairs(values: Vec<(&'static str, String)>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or an empty string if the key is not part of this config.
    pub fn value(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
