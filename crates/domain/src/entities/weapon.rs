//! Weapon entity - at most one per character

use serde::{Deserialize, Serialize};

use crate::ids::WeaponId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    /// Base damage before the strength/defense rolls
    pub damage: i32,
}

impl Weapon {
    pub fn new(id: WeaponId, name: impl Into<String>, damage: i32) -> Self {
        Self {
            id,
            name: name.into(),
            damage,
        }
    }
}
