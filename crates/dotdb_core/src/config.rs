//! Store configuration.

use dotdb_codec::Format;

/// Configuration for opening a store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to write indented, human-readable JSON.
    pub pretty: bool,

    /// Whether to create missing parent directories on open.
    pub create_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: false,
            create_dirs: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to write indented JSON.
    #[must_use]
    pub const fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    /// Sets whether to create missing parent directories.
    #[must_use]
    pub const fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// The JSON layout snapshots are written in.
    #[must_use]
    pub const fn format(&self) -> Format {
        Format::from_pretty(self.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.pretty);
        assert!(config.create_dirs);
        assert_eq!(config.format(), Format::Compact);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new().pretty(true).create_dirs(false);

        assert!(config.pretty);
        assert!(!config.create_dirs);
        assert_eq!(config.format(), Format::Pretty);
    }
}
