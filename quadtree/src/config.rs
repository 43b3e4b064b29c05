use crate::error::{QuadtreeError, QuadtreeResult};
use serde::{Deserialize, Serialize};

/// Order in which a range query visits the four children of a split node.
///
/// Inserts always try NE, NW, SE, SW. Only the order of query results
/// depends on this setting, never their contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildOrder {
    /// NE, NW, SE, SW, the same order inserts use.
    #[default]
    Canonical,
    /// NE, NW, SW, SE, the ordering older trees produced results in.
    Legacy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub node_capacity: usize,
    pub child_order: ChildOrder,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 4,
            child_order: ChildOrder::Canonical,
        }
    }
}

impl Config {
    /// Parses a config from TOML. Missing keys fall back to the defaults.
    pub fn from_toml_str(contents: &str) -> QuadtreeResult<Self> {
        let config: Config =
            toml::from_str(contents).map_err(|e| QuadtreeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.node_capacity == 0 {
            return Err(QuadtreeError::InvalidCapacity {
                capacity: self.node_capacity,
            });
        }
        Ok(())
    }
}
