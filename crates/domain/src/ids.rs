use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Combatants
define_id!(CharacterId);

// Equipment and abilities
define_id!(WeaponId);
define_id!(SkillId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        let id = CharacterId::new(42);
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "42");

        let back: SkillId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(back, SkillId::new(7));
    }

    #[test]
    fn ids_convert_to_and_from_i32() {
        let id: WeaponId = 3.into();
        assert_eq!(i32::from(id), 3);
        assert_eq!(id.to_string(), "3");
    }
}
