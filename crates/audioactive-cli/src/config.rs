//! CLI configuration types
//!
//! Read from `audioactive.toml` when present; every field has a default,
//! and command-line flags take precedence over the file.

use anyhow::Context;
use audioactive_core::constants;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete CLI configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Sequence generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Atom table selection
    #[serde(default)]
    pub atoms: AtomsConfig,
}

/// Generation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Seed term
    #[serde(default = "default_seed")]
    pub seed: String,

    /// Number of transform applications
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Largest accepted iteration count
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_seed() -> String {
    constants::DEFAULT_SEED.to_string()
}

fn default_iterations() -> usize {
    constants::DEFAULT_ITERATIONS
}

fn default_max_iterations() -> usize {
    constants::MAX_ITERATIONS
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            iterations: default_iterations(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Atom table selection
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AtomsConfig {
    /// Restrict detection to these element symbols (empty = all 92)
    #[serde(default)]
    pub symbols: Vec<String>,
}

impl CliConfig {
    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("Config {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {:?}", path))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing config {:?}", path))?;

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.generation.seed, "1");
        assert_eq!(config.generation.iterations, 10);
        assert_eq!(config.generation.max_iterations, 50);
        assert!(config.atoms.symbols.is_empty());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generation]\nseed = \"3\"\n\n[atoms]\nsymbols = [\"U\", \"Pa\"]").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.generation.seed, "3");
        assert_eq!(config.generation.iterations, 10);
        assert_eq!(config.atoms.symbols, vec!["U", "Pa"]);
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generation]\niterations = \"many\"").unwrap();
        assert!(CliConfig::load(file.path()).is_err());
    }
}
