use adventure_core::{
    Character, GameConfig, GameEnv, GameState, GameWorld, Intent, IntentKind, Item, Location,
    Notification, Objective, ObjectiveKind, OutcomeStatus, Quest, QuestStatus, ReputationLevel,
    ReputationTracker, ScriptedRng, TurnObservers, award_xp, play_turn, start_quest,
};

fn village() -> GameState {
    let world = GameWorld::new().with_location(
        Location::new("square", "Square")
            .with_item(Item::new("Copper Coin"))
            .with_item(Item::new("Copper Coin"))
            .with_item(Item::new("Copper Coin"))
            .with_item(Item::new("Copper Coin"))
            .with_character(Character::new("Goblin").with_hp(5).hostile()),
    );
    GameState::new(Character::new("Hero").with_stat("strength", 12), "square", world)
}

#[test]
fn one_award_can_cross_two_thresholds() {
    let config = GameConfig::default();
    let mut hero = Character::new("Hero").with_stat("strength", 12);

    let notes = award_xp(&mut hero, 260, &config);

    assert_eq!(
        notes,
        [
            Notification::XpGained { amount: 260 },
            Notification::LevelUp {
                level: 3,
                levels_gained: 2
            },
        ]
    );
    assert_eq!(hero.level, 3);
    assert_eq!(hero.xp, 10);
    assert_eq!(hero.xp_to_next_level, 225);
    assert_eq!(hero.max_hp, 30);
    assert_eq!(hero.hp, 30);
    assert_eq!(hero.stats.get("strength"), 14);
}

#[test]
fn three_gifts_make_the_guard_friendly() {
    let tracker = ReputationTracker::default();
    let sergeant = Character::new("Sergeant").with_faction("town_guard");
    let mut state = village();

    let mut last = None;
    for _ in 0..3 {
        last = tracker.process_event(&mut state.reputation, &IntentKind::GiveItem, Some(&sergeant));
    }

    assert_eq!(state.reputation.score("town_guard"), 15);
    assert_eq!(state.reputation.level("town_guard"), ReputationLevel::Friendly);
    assert_eq!(
        last,
        Some(Notification::ReputationChanged {
            faction: "town_guard".into(),
            delta: 5,
            score: 15,
            level: ReputationLevel::Friendly,
        })
    );
}

#[test]
fn counted_objective_completes_exactly_once() {
    let config = GameConfig::default();
    let rng = ScriptedRng::new([10]);
    let env = GameEnv::with_rng(&rng, &config);
    let observers = TurnObservers::default();
    let mut state = village();
    start_quest(
        &mut state,
        Quest::new("coins", "Spare Change").with_objective(
            Objective::new("collect", ObjectiveKind::AcquireItem, "coin")
                .with_required_count(3)
                .with_description("Collect three coins"),
        ),
    )
    .expect("new quest");

    let mut completions = 0;
    for _ in 0..4 {
        let report = play_turn(&mut state, env, &observers, &Intent::take("coin"));
        assert!(report.outcome.is_success());
        completions += report.completed_quests.len();
    }

    assert_eq!(completions, 1);
    let quest = &state.quest_log["coins"];
    assert_eq!(quest.status, QuestStatus::Completed);
    assert_eq!(quest.objectives[0].current_count, 3);
    assert_eq!(state.player.inventory.len(), 4);
}

#[test]
fn winning_a_fight_completes_a_kill_objective() {
    let config = GameConfig::default();
    // initiative 15 vs 5, unarmed attack 15, damage 4
    let rng = ScriptedRng::new([15, 5, 15, 4]);
    let env = GameEnv::with_rng(&rng, &config);
    let observers = TurnObservers::default();
    let mut state = village();
    if let Some(goblin) = state
        .current_location_mut()
        .and_then(|loc| loc.characters.first_mut())
    {
        goblin.hp = 4;
    }
    start_quest(
        &mut state,
        Quest::new("pest", "Pest Control")
            .with_xp_reward(50)
            .with_objective(Objective::new("slay", ObjectiveKind::KillTarget, "Goblin")),
    )
    .expect("new quest");

    let report = play_turn(&mut state, env, &observers, &Intent::attack("goblin"));

    assert_eq!(report.completed_quests, ["pest"]);
    assert_eq!(state.player.xp, 50);
    assert!(
        report
            .notifications
            .contains(&Notification::XpGained { amount: 50 })
    );
}

#[test]
fn a_kill_counts_once_however_often_the_corpse_is_attacked() {
    let config = GameConfig::default();
    // initiative 15 vs 5, unarmed attack 15, damage 4
    let rng = ScriptedRng::new([15, 5, 15, 4]);
    let env = GameEnv::with_rng(&rng, &config);
    let observers = TurnObservers::default();
    let world = GameWorld::new().with_location(
        Location::new("sewer", "Sewer")
            .with_character(Character::new("Giant Rat").with_hp(4).hostile()),
    );
    let mut state = GameState::new(Character::new("Hero"), "sewer", world);
    start_quest(
        &mut state,
        Quest::new("rats", "Rat Catcher").with_objective(
            Objective::new("cull", ObjectiveKind::KillTarget, "Giant Rat").with_required_count(3),
        ),
    )
    .expect("new quest");

    let statuses: Vec<_> = (0..3)
        .map(|_| play_turn(&mut state, env, &observers, &Intent::attack("rat")).outcome.status)
        .collect();

    assert_eq!(
        statuses,
        [OutcomeStatus::Victory, OutcomeStatus::Failure, OutcomeStatus::Failure]
    );
    let quest = &state.quest_log["rats"];
    assert_eq!(quest.objectives[0].current_count, 1);
    assert_eq!(quest.status, QuestStatus::Active);
}
