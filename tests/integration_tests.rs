use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use simon_says::engine::{Engine, RecordingPlayer};
use simon_says::input::{handle_key_event, start_control};
use simon_says::types::*;

fn engine(seed: u64) -> Engine<RecordingPlayer> {
    Engine::new(seed, RecordingPlayer::new())
}

fn run_until(e: &mut Engine<RecordingPlayer>, pred: impl Fn(&Engine<RecordingPlayer>) -> bool) {
    for _ in 0..20_000 {
        if pred(e) {
            return;
        }
        e.tick(TICK_MS);
    }
    panic!("condition not reached; state = {:?}", e.state());
}

fn await_input(e: &mut Engine<RecordingPlayer>) {
    run_until(e, |e| e.session().accepts_input());
}

/// Replay the whole sequence back, letting each press flash finish.
fn echo_sequence(e: &mut Engine<RecordingPlayer>) {
    await_input(e);
    for c in e.sequence().to_vec() {
        assert!(e.press_color(c));
        e.tick(PRESS_FLASH_MS);
    }
}

fn other_than(c: Color) -> Color {
    Color::ALL.into_iter().find(|&x| x != c).unwrap()
}

fn key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
}

#[test]
fn first_round_plays_one_color_then_waits() {
    let mut e = engine(7);
    assert!(e.start());
    assert_eq!(e.state(), GameState::PlayingSequenceWaiting);
    assert_eq!(e.sequence().len(), 1);

    await_input(&mut e);
    assert_eq!(e.state(), GameState::AwaitingInput);
    assert_eq!(e.sound().played(), e.sequence());
    assert!(e.active_color().is_none());
}

#[test]
fn wrong_press_relaxed_replays_same_sequence() {
    let mut e = engine(11);
    e.start();
    await_input(&mut e);
    let seq = e.sequence().to_vec();

    assert!(e.press_color(other_than(seq[0])));
    e.tick(PRESS_FLASH_MS);
    assert_eq!(e.state(), GameState::Missed);
    assert_eq!(e.snapshot().message(), "Sorry, you missed. Try again!");

    e.tick(MISS_RECOVERY_MS);
    assert_eq!(e.state(), GameState::PlayingSequenceWaiting);
    assert_eq!(e.sequence(), seq.as_slice());
    assert!(e.user_input().is_empty());
}

#[test]
fn wrong_press_strict_starts_over_with_one_color() {
    let mut e = engine(3).with_strict_mode(true);
    e.start();
    echo_sequence(&mut e);
    e.tick(ROUND_ADVANCE_MS);
    await_input(&mut e);
    assert_eq!(e.sequence().len(), 2);

    let first = e.sequence()[0];
    e.press_color(other_than(first));
    e.tick(PRESS_FLASH_MS);
    assert_eq!(e.state(), GameState::MissedStrict);

    e.tick(MISS_RECOVERY_MS);
    assert_eq!(e.sequence().len(), 1);
    assert!(e.strict_mode());
    assert_eq!(e.games(), 2);
}

#[test]
fn correct_rounds_grow_the_sequence_as_a_prefix() {
    let mut e = engine(21);
    e.start();
    let mut previous = e.sequence().to_vec();

    for expected_len in 2..=3 {
        echo_sequence(&mut e);
        e.tick(ROUND_ADVANCE_MS);
        assert_eq!(e.sequence().len(), expected_len);
        assert_eq!(&e.sequence()[..previous.len()], previous.as_slice());
        previous = e.sequence().to_vec();
    }
    assert_eq!(e.best_steps(), 2);
}

#[test]
fn long_sequences_show_encouragement() {
    let mut e = engine(5);
    e.start();
    while e.sequence().len() < ENCOURAGE_AFTER_LEN + 1 {
        echo_sequence(&mut e);
        e.tick(ROUND_ADVANCE_MS);
    }

    echo_sequence(&mut e);
    assert_eq!(e.state(), GameState::Encouraged);
    assert_eq!(e.snapshot().message(), "Great, keep going!");
}

#[test]
fn twenty_correct_steps_win_and_stop() {
    let mut e = engine(99);
    e.start();
    loop {
        echo_sequence(&mut e);
        if e.state() == GameState::Won {
            break;
        }
        e.tick(ROUND_ADVANCE_MS);
    }

    assert_eq!(e.sequence().len(), MAX_SEQUENCE_LEN);
    assert_eq!(e.snapshot().message(), "Hurray, you win!");

    // Terminal: nothing more is scheduled and presses are refused.
    e.tick(10_000);
    assert_eq!(e.state(), GameState::Won);
    assert!(!e.press_color(Color::Red));
}

#[test]
fn presses_during_playback_are_ignored() {
    let mut e = engine(8);
    e.start();
    assert!(!e.press_color(Color::Red));

    run_until(&mut e, |e| e.active_color().is_some());
    assert!(!e.press_color(Color::Red));
    assert!(e.user_input().is_empty());
}

#[test]
fn toggling_strict_restarts_at_length_one() {
    let mut e = engine(13);
    e.start();
    echo_sequence(&mut e);
    e.tick(ROUND_ADVANCE_MS);
    assert_eq!(e.sequence().len(), 2);

    e.toggle_strict_mode();
    assert!(e.strict_mode());
    assert_eq!(e.sequence().len(), 1);
    assert_eq!(e.state(), GameState::PlayingSequenceWaiting);
}

#[test]
fn restarting_twice_leaves_one_clean_playback() {
    let mut e = engine(17);
    e.start();
    e.tick(400);

    e.restart();
    e.restart();
    let seq = e.sequence().to_vec();
    e.sound_mut().take();

    await_input(&mut e);
    assert_eq!(e.sequence(), seq.as_slice());
    assert_eq!(e.sound().played(), seq.as_slice());
}

#[test]
fn key_events_drive_a_round() {
    let mut e = engine(31);

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let intent = handle_key_event(enter).map(|i| match i {
        GameIntent::Start => start_control(e.state()),
        other => other,
    });
    assert_eq!(intent, Some(GameIntent::Start));
    assert!(e.apply_intent(GameIntent::Start));
    await_input(&mut e);

    let digit = match e.sequence()[0] {
        Color::Red => '1',
        Color::Yellow => '2',
        Color::Blue => '3',
        Color::Green => '4',
    };
    let press = handle_key_event(key(digit)).unwrap();
    assert!(e.apply_intent(press));
    e.tick(PRESS_FLASH_MS);
    e.tick(ROUND_ADVANCE_MS);
    assert_eq!(e.sequence().len(), 2);

    // Start key mid-game maps to restart.
    assert_eq!(start_control(e.state()), GameIntent::Restart);
    let strict = handle_key_event(key('s')).unwrap();
    assert!(e.apply_intent(strict));
    assert!(e.strict_mode());
}

#[test]
fn same_seed_same_game() {
    let mut a = engine(1234);
    let mut b = engine(1234);
    a.start();
    b.start();
    for _ in 0..4 {
        echo_sequence(&mut a);
        echo_sequence(&mut b);
        a.tick(ROUND_ADVANCE_MS);
        b.tick(ROUND_ADVANCE_MS);
    }
    assert_eq!(a.sequence(), b.sequence());
}
