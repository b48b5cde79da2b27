//! Partition configuration via `partition.toml`
//!
//! Partitions are explicit caller configuration: they are never inferred
//! from data and never persisted by this crate. A configuration names the
//! combination semantics and the partition labels; omitting the semantics
//! leaves the graph unpartitioned.
//!
//! The configuration path is the one place where untyped input reaches the
//! partition layer, so the null checks live here. A missing or `null` label
//! array and a `null` label element are precondition violations raised by
//! [`PartitionConfig::build`], before any partition exists.

use crate::contract::ReadPartition;
use crate::partition::Partition;
use crate::semantics::LabelSemantics;
use labelgraph_core::{PartitionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Config file name conventionally used for a partition definition.
pub const CONFIG_FILE_NAME: &str = "partition.toml";

/// Partition configuration loaded from TOML or JSON.
///
/// # Example
///
/// ```toml
/// # "all" = vertex carries every label, "any" = at least one
/// semantics = "any"
/// labels = ["Tenant1", "Tenant2"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Combination semantics: `"all"`, `"any"`, or absent for no partition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantics: Option<String>,
    /// Partition labels. Elements are optional so that JSON `null` entries
    /// reach the precondition check instead of failing deserialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Option<String>>>,
}

impl PartitionConfig {
    /// Configuration for a partition with the given semantics and labels.
    pub fn new<I, S>(semantics: LabelSemantics, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PartitionConfig {
            semantics: Some(semantics.id().to_string()),
            labels: Some(labels.into_iter().map(|l| Some(l.into())).collect()),
        }
    }

    /// Parse the semantics string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"all"` or `"any"`.
    pub fn semantics(&self) -> Result<Option<LabelSemantics>> {
        match self.semantics.as_deref() {
            None => Ok(None),
            Some(id) => LabelSemantics::from_id(id).map(Some).ok_or_else(|| {
                PartitionError::invalid_config(format!(
                    "Invalid partition semantics '{}'. Expected \"all\" or \"any\".",
                    id
                ))
            }),
        }
    }

    /// Build the partition described by this configuration.
    ///
    /// # Errors
    ///
    /// - `PreconditionViolation` if semantics are set and the label array is
    ///   missing or `null`, or if any label is `null`.
    /// - `InvalidConfig` if the semantics string is unknown.
    pub fn build(&self) -> Result<Partition> {
        let semantics = match self.semantics()? {
            Some(semantics) => semantics,
            None => return Ok(Partition::default()),
        };
        let labels = self
            .labels
            .as_ref()
            .ok_or_else(|| PartitionError::null_argument("labels"))?;
        let labels = labels
            .iter()
            .map(|label| {
                label
                    .clone()
                    .ok_or_else(|| PartitionError::null_argument("label"))
            })
            .collect::<Result<Vec<String>>>()?;
        Ok(Partition::with_semantics(semantics, labels))
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            PartitionError::invalid_config(format!("Failed to parse partition config: {}", e))
        })
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            PartitionError::invalid_config(format!("Failed to parse partition config: {}", e))
        })
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// semantics string is unknown.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            PartitionError::InvalidConfig(message) => {
                PartitionError::invalid_config(format!("{} ({})", message, path.display()))
            }
            other => other,
        })?;
        // Validate the semantics value eagerly
        let semantics = config.semantics()?;
        info!(
            path = %path.display(),
            semantics = semantics.map(|s| s.id()).unwrap_or("none"),
            "loaded partition config"
        );
        Ok(config)
    }

    /// Serialize this config to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            PartitionError::invalid_config(format!("Failed to serialize partition config: {}", e))
        })
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns a commented template config file.
    pub fn default_toml() -> &'static str {
        r#"# Read partition configuration
#
# Semantics: "all" or "any"; leave unset for an unpartitioned graph
#   "all" = vertex must carry every label (MATCH pattern, index friendly)
#   "any" = vertex must carry at least one label (MATCH predicate for 2+ labels)
# semantics = "all"

# Partition labels. Required when semantics is set.
# labels = ["Tenant1"]
"#
    }
}

impl From<&Partition> for PartitionConfig {
    fn from(partition: &Partition) -> Self {
        match partition.semantics() {
            Some(semantics) => PartitionConfig::new(semantics, partition.labels().iter().cloned()),
            None => PartitionConfig::default(),
        }
    }
}
