//! Envelope-returning entry points for the arena.
//!
//! Every call returns a [`ServiceResponse`]; errors never escape as `Err`.

use std::sync::Arc;

use arena_domain::{CharacterId, SkillId};
use arena_shared::{
    AddCharacterSkillDto, AttackResultDto, CharacterDto, FightRequestDto, FightResultDto,
    HighscoreDto, ServiceResponse, SkillAttackDto, WeaponAttackDto,
};

use super::error_sanitizer::{fight_error_message, skill_error_message};
use crate::app::App;

#[derive(Clone)]
pub struct FightApi {
    app: Arc<App>,
}

impl FightApi {
    pub fn new(app: Arc<App>) -> Self {
        Self { app }
    }

    /// The message is the defeat announcement when the opponent went down,
    /// otherwise the attack report.
    pub async fn weapon_attack(&self, request: WeaponAttackDto) -> ServiceResponse<AttackResultDto> {
        match self
            .app
            .use_cases
            .fight
            .weapon_attack
            .execute(
                CharacterId::new(request.attacker_id),
                CharacterId::new(request.opponent_id),
            )
            .await
        {
            Ok(outcome) => {
                ServiceResponse::ok_with_message(AttackResultDto::from(&outcome), outcome.summary())
            }
            Err(e) => ServiceResponse::fail(fight_error_message(&e, "resolve the weapon attack")),
        }
    }

    pub async fn skill_attack(&self, request: SkillAttackDto) -> ServiceResponse<AttackResultDto> {
        match self
            .app
            .use_cases
            .fight
            .skill_attack
            .execute(
                CharacterId::new(request.attacker_id),
                CharacterId::new(request.opponent_id),
                SkillId::new(request.skill_id),
            )
            .await
        {
            Ok(outcome) => {
                ServiceResponse::ok_with_message(AttackResultDto::from(&outcome), outcome.summary())
            }
            Err(e) => ServiceResponse::fail(fight_error_message(&e, "resolve the skill attack")),
        }
    }

    pub async fn fight(&self, request: FightRequestDto) -> ServiceResponse<FightResultDto> {
        let ids: Vec<CharacterId> = request
            .character_ids
            .into_iter()
            .map(CharacterId::new)
            .collect();

        match self.app.use_cases.fight.fight.execute(&ids).await {
            Ok(outcome) => ServiceResponse::ok(FightResultDto {
                log: outcome.log.into_lines(),
            }),
            Err(e) => ServiceResponse::fail(fight_error_message(&e, "run the fight")),
        }
    }

    pub async fn highscore(&self) -> ServiceResponse<Vec<HighscoreDto>> {
        match self.app.use_cases.fight.highscore.execute().await {
            Ok(ranked) => ServiceResponse::ok(ranked.iter().map(HighscoreDto::from).collect()),
            Err(e) => ServiceResponse::fail(fight_error_message(&e, "load the highscore")),
        }
    }

    pub async fn learn_skill(&self, request: AddCharacterSkillDto) -> ServiceResponse<CharacterDto> {
        match self
            .app
            .use_cases
            .skills
            .learn
            .execute(
                CharacterId::new(request.character_id),
                SkillId::new(request.skill_id),
            )
            .await
        {
            Ok(character) => ServiceResponse::ok(CharacterDto::from(&character)),
            Err(e) => ServiceResponse::fail(skill_error_message(&e, "add the skill")),
        }
    }
}
