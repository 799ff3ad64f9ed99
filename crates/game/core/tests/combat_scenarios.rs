use adventure_core::{
    Character, CombatError, CombatResult, CombatState, GameConfig, GameEnv, GameState, GameWorld,
    Intent, IntentKind, Item, Location, OutcomeStatus, ScriptedRng, resolve_intent,
};

fn arena(goblin_hp: i32, player_hp: i32) -> GameState {
    let goblin = Character::new("Goblin")
        .with_hp(goblin_hp)
        .with_armor_class(10)
        .hostile();
    let world = GameWorld::new().with_location(
        Location::new("cave", "Cave")
            .with_character(goblin)
            .with_character(Character::new("Miner")),
    );
    let player = Character::new("Hero")
        .with_hp(player_hp)
        .with_armor_class(12)
        .with_equipped(Item::weapon("Shortsword", "1d8", 0));
    GameState::new(player, "cave", world)
}

fn goblin_hp(state: &GameState) -> Option<i32> {
    state
        .current_location()
        .and_then(|loc| loc.characters.iter().find(|c| c.name == "Goblin"))
        .map(|c| c.hp)
}

#[test]
fn opening_blow_wins_the_fight() {
    let config = GameConfig::default();
    // initiative 15 vs 5, attack 15, damage 8
    let rng = ScriptedRng::new([15, 5, 15, 8]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(5, 20);

    let outcome = resolve_intent(&mut state, env, &Intent::attack("gob"));

    assert_eq!(outcome.status, OutcomeStatus::Victory);
    assert!(state.combat.is_none());
    let summary = state.last_combat.as_ref().expect("fight recorded");
    assert_eq!(summary.result, CombatResult::Victory);
    assert!(summary.involved("Goblin"));
    assert!(!summary.involved("Miner"));
    assert_eq!(goblin_hp(&state), Some(-3));
    assert_eq!(rng.consumed(), 4);
    assert_eq!(state.nonce, 4);
}

#[test]
fn player_falls_to_a_faster_foe() {
    let config = GameConfig::default();
    // initiative 2 vs 18, player rolls a 1, goblin hits with 15 for 4
    let rng = ScriptedRng::new([2, 18, 1, 15, 4]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(20, 3);

    let outcome = resolve_intent(&mut state, env, &Intent::attack("goblin"));

    assert_eq!(outcome.status, OutcomeStatus::Defeat);
    assert!(state.combat.is_none());
    assert_eq!(
        state.last_combat.as_ref().map(|s| s.result),
        Some(CombatResult::Defeat)
    );
    assert!(state.player.is_defeated());
    assert!(outcome.narration.iter().any(|line| line == "--- Round 2 ---"));
}

#[test]
fn fight_suspends_on_the_players_turn_and_resumes() {
    let config = GameConfig::default();
    // both sides miss in round one; the sequence then wraps
    let rng = ScriptedRng::new([15, 5, 2, 2]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(20, 20);

    let outcome = resolve_intent(&mut state, env, &Intent::attack("goblin"));
    assert_eq!(outcome.status, OutcomeStatus::Ongoing);
    let combat = state.combat.as_ref().expect("fight in progress");
    assert_eq!(combat.round, 2);
    assert_eq!(combat.current(), Some("Hero"));

    let rejected = resolve_intent(&mut state, env, &Intent::take("pickaxe"));
    assert!(rejected.is_failure());
    assert_eq!(rng.consumed(), 4);

    // attack 15 for 5, goblin misses with 2
    let outcome = resolve_intent(&mut state, env, &Intent::attack("goblin"));
    assert_eq!(outcome.status, OutcomeStatus::Ongoing);
    assert_eq!(goblin_hp(&state), Some(15));
    assert_eq!(state.combat.as_ref().map(|c| c.round), Some(3));
    assert_eq!(state.player.hp, 20);
}

#[test]
fn bystanders_join_only_when_targeted() {
    let config = GameConfig::default();
    let rng = ScriptedRng::new([15, 5, 2, 2]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(20, 20);

    resolve_intent(&mut state, env, &Intent::attack("goblin"));
    let combat = state.combat.as_ref().expect("fight in progress");
    assert_eq!(combat.participants, ["Hero", "Goblin"]);
}

#[test]
fn rejected_attacks_before_a_fight_change_nothing() {
    let config = GameConfig::default();
    let rng = ScriptedRng::new([15, 5, 2, 2]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(20, 20);

    let outcome = resolve_intent(&mut state, env, &Intent::attack("hero"));
    assert!(outcome.is_failure());
    assert_eq!(outcome.detail, Some(CombatError::SelfTarget.to_string()));

    let outcome = resolve_intent(&mut state, env, &Intent::new(IntentKind::Attack));
    assert!(outcome.is_failure());
    assert_eq!(outcome.detail, Some(CombatError::MissingTarget.to_string()));

    assert!(state.combat.is_none());
    assert_eq!(rng.consumed(), 0);
    assert_eq!(state.nonce, 0);
}

#[test]
fn rejected_attacks_mid_fight_keep_the_players_turn() {
    let config = GameConfig::default();
    let rng = ScriptedRng::new([15, 5, 2, 2]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(20, 20);
    resolve_intent(&mut state, env, &Intent::attack("goblin"));
    let before = state.combat.clone().expect("fight in progress");

    let rejections = [
        (
            Intent::attack("miner"),
            CombatError::NotAParticipant("miner".into()),
        ),
        (
            Intent::attack("hero"),
            CombatError::NotAParticipant("hero".into()),
        ),
        (
            Intent::new(IntentKind::Attack),
            CombatError::MissingCombatTarget,
        ),
    ];
    for (intent, error) in rejections {
        let outcome = resolve_intent(&mut state, env, &intent);
        assert!(outcome.is_failure());
        assert_eq!(outcome.detail, Some(error.to_string()));
    }

    let after = state.combat.as_ref().expect("fight still in progress");
    assert_eq!(after.turn_index, before.turn_index);
    assert_eq!(after.round, before.round);
    assert_eq!(after.participants, before.participants);
    assert_eq!(rng.consumed(), 4);
}

#[test]
fn corpses_cannot_be_fought_again() {
    let config = GameConfig::default();
    // initiative 15 vs 5, attack 15, damage 8
    let rng = ScriptedRng::new([15, 5, 15, 8]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(5, 20);

    let outcome = resolve_intent(&mut state, env, &Intent::attack("goblin"));
    assert_eq!(outcome.status, OutcomeStatus::Victory);
    state.last_combat = None;

    let outcome = resolve_intent(&mut state, env, &Intent::attack("goblin"));
    assert!(outcome.is_failure());
    assert_eq!(
        outcome.detail,
        Some(CombatError::TargetNotPresent("goblin".into()).to_string())
    );
    assert!(state.combat.is_none());
    assert!(state.last_combat.is_none());
    assert_eq!(rng.consumed(), 4);
}

#[test]
fn defeated_hostiles_stay_out_of_new_fights() {
    let config = GameConfig::default();
    let rng = ScriptedRng::new([15, 5, 2, 2]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(20, 20);
    if let Some(cave) = state.current_location_mut() {
        cave.characters.push(Character::new("Bandit").with_hp(6).hostile());
        if let Some(bandit) = cave.characters.last_mut() {
            bandit.hp = 0;
        }
    }

    resolve_intent(&mut state, env, &Intent::attack("goblin"));
    let combat = state.combat.as_ref().expect("fight in progress");
    assert_eq!(combat.participants, ["Hero", "Goblin"]);
}

#[test]
fn absurd_weapon_dice_fall_back_to_unarmed() {
    let config = GameConfig::default();
    // initiative 15 vs 5, attack 15, unarmed damage 3, goblin misses with 1
    let rng = ScriptedRng::new([15, 5, 15, 3, 1]);
    let env = GameEnv::with_rng(&rng, &config);
    let mut state = arena(4, 20);
    state.player = Character::new("Hero")
        .with_hp(20)
        .with_armor_class(12)
        .with_equipped(Item::weapon("Glitch Blade", "2d4294967295", 0));

    let outcome = resolve_intent(&mut state, env, &Intent::attack("goblin"));

    assert_eq!(outcome.status, OutcomeStatus::Ongoing);
    assert_eq!(goblin_hp(&state), Some(1));
    assert_eq!(state.player.hp, 20);
}

#[test]
fn removal_keeps_the_turn_pointer_on_the_same_actor() {
    let mut combat = CombatState::new(vec!["A".into(), "B".into(), "C".into(), "D".into()]);
    combat.turn_index = 2;

    assert!(combat.remove("A"));
    assert_eq!(combat.turn_index, 1);
    assert_eq!(combat.current(), Some("C"));

    assert!(combat.remove("D"));
    assert_eq!(combat.current(), Some("C"));

    assert!(combat.remove("C"));
    assert_eq!(combat.turn_index, 1);
    assert!(combat.is_round_complete());
    assert!(!combat.remove("Z"));
    assert_eq!(combat.roster, ["A", "B", "C", "D"]);
}
