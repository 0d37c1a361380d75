// src/config.rs

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::lookup;

/// Rejected configuration. Raised once at load time; the render path itself
/// never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("group name must not be empty")]
    EmptyGroup,

    #[error("empty language code in group `{0}`")]
    EmptyCode(String),

    #[error("`{code}` maps to itself in group `{group}`")]
    SelfMapping { group: String, code: String },
}

fn default_group_name() -> String {
    "wikipedia".to_owned()
}

/// The override configuration: per-group code substitution tables plus the
/// group used when site resolution fails.
///
/// Read once from the host's configuration store at process start and
/// treated as immutable afterwards.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OverrideSpec {
    /// Group name → (source code → replacement code).
    #[serde(default)]
    pub groups: HashMap<String, HashMap<String, String>>,

    /// Group assumed for sites the registry cannot classify.
    #[serde(default = "default_group_name")]
    pub default_group: String,
}

impl Default for OverrideSpec {
    fn default() -> Self {
        Self {
            groups: HashMap::new(),
            default_group: default_group_name(),
        }
    }
}

impl OverrideSpec {
    /// Build a validated spec.
    pub fn new(
        groups: HashMap<String, HashMap<String, String>>,
        default_group: impl Into<String>,
    ) -> Result<Self, SpecError> {
        let spec = Self {
            groups,
            default_group: default_group.into(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Validate a spec that arrived through deserialization.
    pub fn validate(&self) -> Result<(), SpecError> {
        for (group, overrides) in &self.groups {
            if group.is_empty() {
                return Err(SpecError::EmptyGroup);
            }
            for (source, target) in overrides {
                if source.is_empty() || target.is_empty() {
                    return Err(SpecError::EmptyCode(group.clone()));
                }
                if source == target {
                    return Err(SpecError::SelfMapping {
                        group: group.clone(),
                        code: source.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Substitution pairs configured for `group`, if any.
    pub fn group(&self, name: &str) -> Option<&HashMap<String, String>> {
        lookup::find(Some(name), Some(&self.groups))
    }
}
