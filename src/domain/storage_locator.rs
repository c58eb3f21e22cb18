use std::fmt;

/// Where an upload's bytes live inside the configured blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocator(String);

impl StorageLocator {
    pub fn new(prefix: &str, filename: &str) -> Self {
        let prefix = prefix.trim_matches('/');
        if prefix.is_empty() {
            Self(filename.to_string())
        } else {
            Self(format!("{}/{}", prefix, filename))
        }
    }

    pub fn from_raw(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
