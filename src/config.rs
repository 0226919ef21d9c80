//
//  config.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigError;
use crate::graph::DonationGraph;
use crate::seed;

/// Top-level donorgraph configuration (`donorgraph.toml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonorGraphConfig {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Graph engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum number of nodes. Absent means unbounded.
    #[serde(default)]
    pub max_nodes: Option<usize>,
}

/// Initial dataset loaded before any command runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "seed::builtin_nodes")]
    pub nodes: Vec<String>,
    #[serde(default = "seed::builtin_donations")]
    pub donations: Vec<SeedEdge>,
    #[serde(default)]
    pub capacities: Vec<SeedEdge>,
}

/// One seeded edge: days for donations, capacity for capacities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEdge {
    pub from: String,
    pub to: String,
    pub value: i64,
}

impl SeedEdge {
    pub fn new(from: &str, to: &str, value: i64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            value,
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            nodes: seed::builtin_nodes(),
            donations: seed::builtin_donations(),
            capacities: Vec::new(),
        }
    }
}

impl DonorGraphConfig {
    /// Load config from a TOML file. A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Empty graph honouring `graph.max_nodes`.
    pub fn empty_graph(&self) -> DonationGraph {
        match self.graph.max_nodes {
            Some(limit) => DonationGraph::with_limit(limit),
            None => DonationGraph::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = DonorGraphConfig::load(&dir.path().join("donorgraph.toml")).unwrap();

        assert_eq!(config, DonorGraphConfig::default());
        assert_eq!(config.graph.max_nodes, None);
        assert!(config.seed.enabled);
        assert_eq!(config.seed.nodes.len(), 9);
    }

    #[test]
    fn test_partial_file_keeps_seed_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("donorgraph.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[graph]\nmax_nodes = 100").unwrap();

        let config = DonorGraphConfig::load(&path).unwrap();
        assert_eq!(config.graph.max_nodes, Some(100));
        assert_eq!(config.seed, SeedConfig::default());
        assert_eq!(config.empty_graph().max_nodes(), Some(100));
    }

    #[test]
    fn test_custom_seed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("donorgraph.toml");
        std::fs::write(
            &path,
            r#"
[seed]
nodes = ["S", "T"]
donations = []
capacities = [{ from = "S", to = "T", value = 9 }]
"#,
        )
        .unwrap();

        let config = DonorGraphConfig::load(&path).unwrap();
        assert!(config.seed.enabled);
        assert_eq!(config.seed.nodes, vec!["S", "T"]);
        assert!(config.seed.donations.is_empty());
        assert_eq!(config.seed.capacities, vec![SeedEdge::new("S", "T", 9)]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("donorgraph.toml");
        std::fs::write(&path, "[graph]\nmax_nodes = \"lots\"\n").unwrap();

        let err = DonorGraphConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
