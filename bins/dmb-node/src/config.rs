//! Node configuration.
//!
//! Layered lowest to highest: built-in defaults, an optional TOML file,
//! `DMB_*` environment variables, then command-line flags (applied by the
//! caller).

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use dmb_consensus::ParameterSet;
use dmb_core::constants::NetworkId;

/// Configuration for a node process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Use the test network instead of mainnet.
    pub testnet: bool,
    /// Root directory for persistent data. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
    /// Log level filter string (e.g. "info", "debug", "dmb_consensus=trace").
    pub log_level: String,
    /// Log output format: "text" or "json".
    pub log_format: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            testnet: false,
            data_dir: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl NodeConfig {
    /// Load from an optional config file plus the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(Environment::with_prefix("DMB").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// The network this configuration asks for.
    pub fn network(&self) -> NetworkId {
        if self.testnet {
            NetworkId::Testnet
        } else {
            NetworkId::Main
        }
    }

    /// Data directory for the selected network.
    ///
    /// An explicit `data_dir` is used as-is. Otherwise the platform data
    /// directory is joined with `dmb` and the network's suffix.
    pub fn data_dir_for(&self, params: &ParameterSet) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dmb");
        match params.data_dir_suffix() {
            "" => base,
            suffix => base.join(suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let cfg = NodeConfig::default();
        assert!(!cfg.testnet);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.log_format, "text");
        assert_eq!(cfg.network(), NetworkId::Main);
    }

    #[test]
    fn file_sets_testnet() {
        let file = write_config("testnet = true\nlog_level = \"debug\"\n");
        let cfg = NodeConfig::load(Some(file.path())).unwrap();
        assert!(cfg.testnet);
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.log_format, "text");
        assert_eq!(cfg.network(), NetworkId::Testnet);
    }

    #[test]
    fn file_sets_data_dir() {
        let file = write_config("data_dir = \"/tmp/dmb-test\"\n");
        let cfg = NodeConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/dmb-test")));
    }

    #[test]
    fn environment_selects_testnet() {
        // SAFETY: other tests read the environment only through `load` and none depends on DMB_TESTNET.
        unsafe { std::env::set_var("DMB_TESTNET", "true") };
        let cfg = NodeConfig::load(None);
        unsafe { std::env::remove_var("DMB_TESTNET") };

        let cfg = cfg.unwrap();
        assert!(cfg.testnet);
        assert_eq!(cfg.network(), NetworkId::Testnet);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(NodeConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn explicit_data_dir_wins() {
        let params = ParameterSet::testnet().unwrap();
        let cfg = NodeConfig {
            data_dir: Some(PathBuf::from("/srv/dmb")),
            ..NodeConfig::default()
        };
        assert_eq!(cfg.data_dir_for(&params), PathBuf::from("/srv/dmb"));
    }

    #[test]
    fn default_data_dir_uses_network_suffix() {
        let cfg = NodeConfig::default();
        let test = ParameterSet::testnet().unwrap();
        let main = ParameterSet::mainnet().unwrap();
        assert!(cfg.data_dir_for(&test).ends_with("dmb/testnet"));
        assert!(cfg.data_dir_for(&main).ends_with("dmb"));
    }
}
