//! Integration tests for the game loop, driven through the facade crate.

use tui_simon::core::{GameController, HeadlessDisplay, MessageLog};
use tui_simon::types::{
    Choice, GameEvent, MoveOutcome, Phase, CHOICES, FLASH_MS, ROUND_DELAY_MS, STEP_INTERVAL_MS,
    TICK_MS, WRONG_MOVE_MESSAGE,
};

type Game = GameController<HeadlessDisplay, MessageLog>;

fn game(seed: u32) -> Game {
    GameController::new(HeadlessDisplay::new(), MessageLog::new(), seed)
}

/// Tick at the real frame rate until the player may move.
fn run_until_input(game: &mut Game) {
    for _ in 0..10_000 {
        if game.phase() == Phase::AwaitingPlayerInput {
            return;
        }
        game.tick(TICK_MS);
    }
    panic!("never reached player input");
}

fn wrong_choice(expected: Choice) -> Choice {
    CHOICES
        .into_iter()
        .find(|c| *c != expected)
        .unwrap()
}

fn play_round(game: &mut Game) -> MoveOutcome {
    run_until_input(game);
    let sequence = game.state().current_game().to_vec();
    let mut last = MoveOutcome::Ignored;
    for choice in sequence {
        last = game.on_activation(choice);
    }
    last
}

#[test]
fn test_game_lifecycle() {
    let mut game = game(12345);
    assert_eq!(game.phase(), Phase::AwaitingNewGame);

    game.new_game();
    assert_eq!(game.state().score(), 0);
    assert_eq!(game.state().current_game().len(), 1);
    assert!(game.state().player_moves().is_empty());
    assert_eq!(game.state().last_button(), None);
    assert!(game.state().turn_in_progress());
    assert_eq!(game.display().score_text(), "0");
    assert!(game.display().all_listeners_attached());
    assert_eq!(game.phase(), Phase::PlayingBackSequence);
}

#[test]
fn test_correct_then_wrong_round() {
    let mut game = game(7);
    game.new_game();

    assert_eq!(play_round(&mut game), MoveOutcome::RoundComplete);
    assert_eq!(game.state().score(), 1);
    assert_eq!(game.display().score_text(), "1");

    for _ in 0..(ROUND_DELAY_MS / TICK_MS + 1) {
        game.tick(TICK_MS);
    }
    assert_eq!(game.state().current_game().len(), 2);

    run_until_input(&mut game);
    let expected = game.state().current_game()[0];
    let outcome = game.on_activation(wrong_choice(expected));

    assert_eq!(outcome, MoveOutcome::WrongMove);
    assert_eq!(game.notifier().count(WRONG_MOVE_MESSAGE), 1);
    assert_eq!(game.notifier().messages().len(), 1);
    assert_eq!(game.state().score(), 0);
    assert_eq!(game.state().current_game().len(), 1);
    assert_eq!(game.display().score_text(), "0");
    assert_eq!(game.best_score(), 1);
}

#[test]
fn test_wrong_second_move_after_correct_first() {
    let mut game = game(31);
    game.new_game();
    assert_eq!(play_round(&mut game), MoveOutcome::RoundComplete);
    game.tick(ROUND_DELAY_MS);
    run_until_input(&mut game);

    let sequence = game.state().current_game().to_vec();
    assert_eq!(sequence.len(), 2);
    assert_eq!(game.on_activation(sequence[0]), MoveOutcome::Accepted);
    assert_eq!(game.state().player_moves(), &sequence[..1]);

    let outcome = game.on_activation(wrong_choice(sequence[1]));
    assert_eq!(outcome, MoveOutcome::WrongMove);
    assert_eq!(game.notifier().count(WRONG_MOVE_MESSAGE), 1);
    assert_eq!(game.state().score(), 0);
    assert_eq!(game.state().current_game().len(), 1);
    assert!(game.state().player_moves().is_empty());
    assert_eq!(game.display().score_text(), "0");
}

#[test]
fn test_sequence_grows_by_one_per_round() {
    let mut game = game(99);
    game.new_game();

    for round in 1..=6u32 {
        let before = game.state().current_game().to_vec();
        assert_eq!(play_round(&mut game), MoveOutcome::RoundComplete);
        assert_eq!(game.state().score(), round);

        game.tick(ROUND_DELAY_MS);
        let after = game.state().current_game();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..], "earlier turns are kept");
    }
}

#[test]
fn test_playback_is_one_highlight_per_interval() {
    let mut game = game(3);
    game.new_game();
    for _ in 0..3 {
        play_round(&mut game);
        game.tick(ROUND_DELAY_MS);
    }
    let sequence = game.state().current_game().to_vec();
    assert_eq!(sequence.len(), 4);
    game.display_mut().clear_highlights();

    for i in 0..sequence.len() {
        game.tick(STEP_INTERVAL_MS - 1);
        assert_eq!(game.display().highlights().len(), i);
        game.tick(1);
        assert_eq!(game.display().highlights(), &sequence[..=i]);
    }
    assert!(!game.state().turn_in_progress());
}

#[test]
fn test_input_is_ignored_while_sequence_plays() {
    let mut game = game(5);
    game.new_game();

    for choice in CHOICES {
        assert_eq!(game.on_activation(choice), MoveOutcome::Ignored);
    }
    assert!(game.state().player_moves().is_empty());
    assert_eq!(game.state().last_button(), None);
    assert!(game.notifier().messages().is_empty());
}

#[test]
fn test_unknown_identifier_changes_nothing() {
    let mut game = game(11);
    game.new_game();
    run_until_input(&mut game);
    let before = game.snapshot();

    let err = game.handle_input("button9").unwrap_err();
    assert_eq!(err.0, "button9");
    assert_eq!(game.snapshot(), before);

    let expected = game.state().current_game()[0];
    assert_eq!(
        game.handle_input(expected.id()).unwrap(),
        MoveOutcome::RoundComplete
    );
}

#[test]
fn test_reset_mid_playback_drops_stale_steps() {
    let mut game = game(21);
    game.new_game();
    play_round(&mut game);
    game.tick(ROUND_DELAY_MS + STEP_INTERVAL_MS);
    assert_eq!(game.phase(), Phase::PlayingBackSequence);

    game.new_game();
    game.display_mut().clear_highlights();
    let fresh = game.state().current_game().to_vec();
    assert_eq!(fresh.len(), 1);

    game.tick(STEP_INTERVAL_MS * 4);
    assert_eq!(game.display().highlights(), &fresh[..]);
    assert_eq!(game.phase(), Phase::AwaitingPlayerInput);
}

#[test]
fn test_lights_always_switch_off() {
    let mut game = game(8);
    game.new_game();
    game.tick(STEP_INTERVAL_MS);
    assert_eq!(game.display().lit_count(), 1);

    game.new_game();
    game.tick(FLASH_MS);
    assert_eq!(game.display().lit_count(), 0);
}

#[test]
fn test_events_describe_a_round() {
    let mut game = game(4);
    game.new_game();
    play_round(&mut game);

    let events: Vec<GameEvent> = game.drain_events().collect();
    assert!(matches!(events[0], GameEvent::NewGame { generation: 1 }));
    assert!(matches!(events[1], GameEvent::TurnAdded { length: 1, .. }));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::PlaybackFinished { length: 1 })));
    assert!(matches!(
        events.last(),
        Some(GameEvent::RoundComplete { score: 1 })
    ));
    assert_eq!(game.drain_events().count(), 0);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = game(2024);
    let mut b = game(2024);
    a.new_game();
    b.new_game();
    for _ in 0..5 {
        play_round(&mut a);
        play_round(&mut b);
        a.tick(ROUND_DELAY_MS);
        b.tick(ROUND_DELAY_MS);
    }
    assert_eq!(a.state().current_game(), b.state().current_game());
}
