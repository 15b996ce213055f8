use std::path::PathBuf;

use battle_content::ContentFactory;
use battle_core::{
    BattleConfig, CharacterRecord, FieldChange, PcgRng, RngSource, Side, TurnPhase, UsageError,
};
use battle_runtime::{BattleOutcome, BattleSession, SessionError, StdRngSource};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"))
}

fn character(id: &str) -> CharacterRecord {
    factory().load_character(id).unwrap()
}

fn session(user: &str, enemy: &str, rng: impl RngSource + 'static) -> BattleSession {
    let config = factory().load_config().unwrap();
    BattleSession::new(&character(user), &character(enemy), config, rng)
}

#[test]
fn shipped_content_loads() {
    let factory = factory();

    assert_eq!(factory.load_config().unwrap(), BattleConfig::default());

    let skills = factory.load_skills().unwrap();
    let roster = factory.load_characters(&skills).unwrap();
    assert_eq!(roster.len(), 4);
    for (id, record) in &roster {
        assert!(!record.skills.is_empty(), "{id} has no skills");
    }
}

#[test]
fn seeded_auto_battle_runs_to_completion() {
    let mut session = session("knight", "slime", StdRngSource::seeded(7));

    for _ in 0..200 {
        if session.is_over() {
            break;
        }
        session.auto_turn().unwrap();
    }

    assert!(session.is_over());
    assert!(matches!(session.outcome(), Some(BattleOutcome::Winner(_) | BattleOutcome::Draw)));

    let history = session.history();
    for (index, result) in history.iter().enumerate() {
        assert_eq!(result.turn as usize, index + 1);

        let summary = &result.summary;
        assert!(summary.user_hp <= summary.user_max_hp);
        assert!(summary.enemy_hp <= summary.enemy_max_hp);
        assert!(summary.user_mp <= summary.user_max_mp);
        assert!(summary.enemy_mp <= summary.enemy_max_mp);

        let last = index + 1 == history.len();
        assert_eq!(result.is_battle_end(), last);
        let expected = if last { TurnPhase::BattleEnded } else { TurnPhase::TurnComplete };
        assert_eq!(result.phase, expected);
    }
}

#[test]
fn same_seed_replays_the_same_battle() {
    let mut first = session("sorceress", "warlock", PcgRng::seeded(42));
    let mut second = session("sorceress", "warlock", PcgRng::seeded(42));

    for _ in 0..10 {
        if first.is_over() {
            break;
        }
        first.auto_turn().unwrap();
        second.auto_turn().unwrap();
    }

    assert_eq!(first.history(), second.history());
    assert_eq!(first.state(), second.state());
}

#[test]
fn player_choices_are_validated_before_the_turn() {
    let mut session = session("knight", "slime", PcgRng::seeded(1));

    let err = session.play_turn("last_stand").unwrap_err();
    assert!(matches!(
        err,
        SessionError::Unusable {
            source: UsageError::HpTooHigh { percent: 40, .. },
            ..
        }
    ));

    let err = session.play_turn("flame_lance").unwrap_err();
    assert_eq!(err, SessionError::UnknownSkill("flame_lance".into()));
    assert!(session.history().is_empty());

    let result = session.play_turn("iron_wall").unwrap();
    assert_eq!(result.turn, 1);
    assert_eq!(result.user.mp_cost, 10);

    let err = session.play_turn("iron_wall").unwrap_err();
    assert!(matches!(
        err,
        SessionError::Unusable {
            source: UsageError::OnCooldown { .. },
            ..
        }
    ));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn field_skill_unlocks_dependent_attack() {
    let mut session = session("sorceress", "slime", PcgRng::seeded(3));

    let err = session.play_turn("storm_bolt").unwrap_err();
    assert!(matches!(
        err,
        SessionError::Unusable {
            source: UsageError::FieldMissing(_),
            ..
        }
    ));

    let result = session.play_turn("thunderstorm").unwrap();
    assert!(result.field.changes.iter().any(|change| matches!(
        change,
        FieldChange::Placed { owner: Side::User, kind, expires_at_turn: 4, .. } if kind == "thunderstorm"
    )));

    let result = session.play_turn("storm_bolt").unwrap();
    assert_eq!(result.turn, 2);
    assert_eq!(result.user.skill.id(), "storm_bolt");
}

#[test]
fn turn_results_serialize_for_consumers() {
    let mut session = session("knight", "warlock", PcgRng::seeded(9));
    session.play_turn("slash").unwrap();

    let value = serde_json::to_value(&session.history()[0]).unwrap();

    assert_eq!(value["turn"], 1);
    assert_eq!(value["user"]["skill"]["id"], "slash");
    assert!(value["summary"]["userHp"].is_u64());
    assert!(value["actionOrder"].is_array());
}
