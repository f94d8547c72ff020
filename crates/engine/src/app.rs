//! Application state and composition.

use std::sync::Arc;

use crate::config::ArenaConfig;
use crate::infrastructure::ports::{CharacterRepo, RandomPort, SkillRepo};
use crate::use_cases::fight::{GetHighscore, RunFight, SkillAttack, WeaponAttack};
use crate::use_cases::skills::LearnSkill;
use crate::use_cases::{FightUseCases, SkillUseCases};

/// Main application state.
///
/// Holds every use case built on the injected ports.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub fight: FightUseCases,
    pub skills: SkillUseCases,
}

impl App {
    pub fn new(
        character: Arc<dyn CharacterRepo>,
        skill: Arc<dyn SkillRepo>,
        random: Arc<dyn RandomPort>,
        config: ArenaConfig,
    ) -> Self {
        let fight = FightUseCases::new(
            Arc::new(WeaponAttack::new(character.clone(), random.clone())),
            Arc::new(SkillAttack::new(character.clone(), random.clone())),
            Arc::new(RunFight::new(character.clone(), random, config.max_rounds)),
            Arc::new(GetHighscore::new(character.clone())),
        );
        let skills = SkillUseCases::new(Arc::new(LearnSkill::new(character, skill)));

        tracing::debug!(max_rounds = config.max_rounds, "Arena use cases composed");

        Self {
            use_cases: UseCases { fight, skills },
        }
    }
}
