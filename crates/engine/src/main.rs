//! Arena Engine - demo entry point.
//!
//! Seeds an in-memory roster, runs a few attacks and a free-for-all, and
//! prints every response envelope as JSON.

use std::sync::Arc;

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arena_domain::{Character, CharacterId, RpgClass, Skill, SkillId, Weapon, WeaponId};
use arena_engine::infrastructure::memory::InMemoryRepository;
use arena_engine::infrastructure::ports::RandomPort;
use arena_engine::infrastructure::random::{SeededRandom, SystemRandom};
use arena_engine::{App, ArenaConfig, FightApi};
use arena_shared::{
    AddCharacterSkillDto, FightRequestDto, ServiceResponse, SkillAttackDto, WeaponAttackDto,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Arena Engine");

    let config = ArenaConfig::from_env();
    let random: Arc<dyn RandomPort> = match config.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(SystemRandom::new()),
    };

    let repo = Arc::new(InMemoryRepository::new());
    seed_roster(&repo);
    tracing::info!(characters = repo.character_count(), "Roster loaded");

    let app = Arc::new(App::new(repo.clone(), repo, random, config));
    let api = FightApi::new(app);

    print_response(
        "weaponAttack",
        &api.weapon_attack(WeaponAttackDto {
            attacker_id: 1,
            opponent_id: 2,
        })
        .await,
    )?;
    print_response(
        "skillAttack",
        &api.skill_attack(SkillAttackDto {
            attacker_id: 3,
            opponent_id: 1,
            skill_id: 2,
        })
        .await,
    )?;
    print_response(
        "skillAttack (unknown skill)",
        &api.skill_attack(SkillAttackDto {
            attacker_id: 2,
            opponent_id: 1,
            skill_id: 2,
        })
        .await,
    )?;
    print_response(
        "addCharacterSkill",
        &api.learn_skill(AddCharacterSkillDto {
            character_id: 4,
            skill_id: 3,
        })
        .await,
    )?;
    print_response(
        "fight",
        &api.fight(FightRequestDto {
            character_ids: vec![1, 2, 3, 4],
        })
        .await,
    )?;
    print_response("highscore", &api.highscore().await)?;

    Ok(())
}

fn seed_roster(repo: &InMemoryRepository) {
    let fireball = Skill::new(SkillId::new(1), "Fireball", 30);
    let frenzy = Skill::new(SkillId::new(2), "Frenzy", 20);
    let blizzard = Skill::new(SkillId::new(3), "Blizzard", 50);
    repo.insert_skill(blizzard);

    repo.insert_character(
        Character::new(CharacterId::new(1), "Frodo")
            .with_weapon(Weapon::new(WeaponId::new(1), "Sting", 20)),
    );
    repo.insert_character(
        Character::new(CharacterId::new(2), "Sam")
            .with_attributes(15, 5, 12)
            .with_weapon(Weapon::new(WeaponId::new(2), "Frying Pan", 15)),
    );
    repo.insert_character(
        Character::new(CharacterId::new(3), "Raistlin")
            .with_class(RpgClass::Mage)
            .with_attributes(5, 20, 5)
            .with_skill(fireball)
            .with_skill(frenzy),
    );
    repo.insert_character(
        Character::new(CharacterId::new(4), "Tanis")
            .with_class(RpgClass::Cleric)
            .with_weapon(Weapon::new(WeaponId::new(4), "Longbow", 18)),
    );
}

fn print_response<T: Serialize>(label: &str, response: &ServiceResponse<T>) -> anyhow::Result<()> {
    println!("== {} ==", label);
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
