//! Local state data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::admin::EntityState;

/// Current on-disk format version
pub const STATE_VERSION: u32 = 1;

/// Top-level state file
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StateFile {
    pub version: u32,
    /// Managed entities keyed by their local address
    #[serde(default)]
    pub resources: BTreeMap<String, EntityState>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            resources: BTreeMap::new(),
        }
    }
}
