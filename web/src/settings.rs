use memshuffle_core::TileCount;
use serde::{Deserialize, Serialize};

use crate::utils::StorageKey;

/// Preferences remembered between visits.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub last_count: TileCount,
}

impl Default for Settings {
    fn default() -> Self {
        Self { last_count: 3 }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "memshuffle:settings";
}
