//! Headless race games played to the end with simulated dice.

use rust_dicerace::core::{Phase, PlayerId};
use rust_dicerace::games::race::RaceGameBuilder;
use rust_dicerace::sequencer::SequencerEvent;

#[test]
fn test_race_has_one_winner() {
    for player_count in [1, 2, 3, 4, 6] {
        let mut game = RaceGameBuilder::new()
            .player_count(player_count)
            .winning_square(36)
            .build(7)
            .unwrap();

        let winner = game.play(0.5, 200_000).expect("race should finish");

        let seq = game.sequencer();
        assert_eq!(seq.phase(), Phase::GameOver);
        assert_eq!(seq.position(winner), 36);
        for player in PlayerId::all(player_count) {
            if player != winner {
                assert!(seq.position(player) < 36);
            }
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = RaceGameBuilder::new().winning_square(24).build(99).unwrap();
    let mut b = RaceGameBuilder::new().winning_square(24).build(99).unwrap();

    let winner_a = a.play(1.0, 100_000);
    let winner_b = b.play(1.0, 100_000);

    assert_eq!(winner_a, winner_b);
    assert_eq!(a.ticks(), b.ticks());
    assert_eq!(a.sequencer().state(), b.sequencer().state());
}

#[test]
fn test_positions_never_exceed_winning_square() {
    let mut game = RaceGameBuilder::new()
        .player_count(3)
        .winning_square(30)
        .jump(3, 22)
        .jump(27, 5)
        .build(2024)
        .unwrap();

    for _ in 0..50_000 {
        if game.is_over() {
            break;
        }
        for event in game.step(0.5) {
            if let SequencerEvent::MoveCompleted { square, .. } = event {
                assert!(square <= 30);
            }
        }
    }

    for record in game.sequencer().state().history() {
        assert!(record.to <= 30);
        assert!(record.from <= 30);
    }
}

#[test]
fn test_history_replays_positions() {
    let mut game = RaceGameBuilder::new()
        .player_count(2)
        .winning_square(20)
        .build(5)
        .unwrap();
    game.play(1.0, 100_000);

    let state = game.sequencer().state();
    let mut replayed = [0u32; 2];
    for record in state.history() {
        assert_eq!(replayed[record.player.index()], record.from);
        replayed[record.player.index()] = record.to;
    }
    for player in PlayerId::all(2) {
        assert_eq!(replayed[player.index()], state.position(player));
    }
}

#[test]
fn test_extra_roll_keeps_player() {
    let mut game = RaceGameBuilder::new()
        .player_count(4)
        .winning_square(60)
        .build(11)
        .unwrap();

    let mut extra_rolls = 0;
    for _ in 0..20_000 {
        if game.is_over() {
            break;
        }
        let before = game.sequencer().current_player();
        for event in game.step(0.5) {
            match event {
                SequencerEvent::ExtraRoll { player } => {
                    extra_rolls += 1;
                    assert_eq!(player, before);
                    assert_eq!(game.sequencer().current_player(), before);
                }
                SequencerEvent::TurnPassed { player } => {
                    assert_eq!(player, before.next(4));
                }
                _ => {}
            }
        }
    }
    assert!(extra_rolls > 0);
}
