use std::sync::Arc;

use arena_domain::{Character, CharacterId, Weapon, WeaponId};

use crate::config::ArenaConfig;
use crate::infrastructure::memory::InMemoryRepository;
use crate::infrastructure::ports::CharacterRepo;
use crate::infrastructure::random::SeededRandom;
use crate::{App, FightApi};

/// A fully composed arena over an in-memory roster.
pub struct TestArena {
    pub repo: Arc<InMemoryRepository>,
    pub api: FightApi,
}

impl TestArena {
    pub fn new(seed: u64, roster: Vec<Character>) -> Self {
        Self::with_config(
            ArenaConfig {
                seed: Some(seed),
                ..ArenaConfig::default()
            },
            roster,
        )
    }

    pub fn with_config(config: ArenaConfig, roster: Vec<Character>) -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        for character in roster {
            repo.insert_character(character);
        }
        let random = Arc::new(SeededRandom::new(config.seed.unwrap_or_default()));
        let app = Arc::new(App::new(repo.clone(), repo.clone(), random, config));
        Self {
            repo,
            api: FightApi::new(app),
        }
    }

    pub async fn stored(&self, id: i32) -> Character {
        CharacterRepo::get(self.repo.as_ref(), CharacterId::new(id))
            .await
            .expect("repository lookup")
            .expect("character stored")
    }
}

/// Default stats with a sword of the given damage.
pub fn swordsman(id: i32, name: &str, damage: i32) -> Character {
    Character::new(CharacterId::new(id), name)
        .with_weapon(Weapon::new(WeaponId::new(id), "Sword", damage))
}
