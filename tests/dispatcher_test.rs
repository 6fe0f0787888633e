//! Integration tests for pianino.
//!
//! Exercises the dispatcher through the public library API with a mock
//! audio backend, covering the input-to-playback scenarios end to end.

use std::fs;

use pianino::app::NoteDispatcher;
use pianino::audio::SampleBank;
use pianino::input::KeyBindings;
use pianino::model::{KeyVisual, Note};
use pianino::test_utils::MockAudio;

use macroquad::prelude::KeyCode;

fn dispatcher_with(notes: &[Note]) -> NoteDispatcher<MockAudio> {
    let dir = tempfile::tempdir().unwrap();
    for note in notes {
        fs::write(dir.path().join(note.sample_file_name()), b"RIFF").unwrap();
    }
    let mut bank = SampleBank::new(MockAudio::new());
    bank.load_all(dir.path());
    NoteDispatcher::new(bank)
}

/// Pressing the 'A' key resolves to C, plays its sample once, and
/// highlights the key; releasing reverts the visual.
#[test]
fn test_press_a_plays_c_and_release_reverts() {
    let bindings = KeyBindings::new();
    let mut dispatcher = dispatcher_with(&Note::ALL);

    let note = bindings.note_for(KeyCode::A).unwrap();
    assert_eq!(note, Note::C);

    dispatcher.on_press(note);
    assert_eq!(dispatcher.samples().backend().play_count(), 1);
    assert_eq!(dispatcher.visual(Note::C), KeyVisual::Pressed);

    dispatcher.on_release(note);
    assert_eq!(dispatcher.visual(Note::C), KeyVisual::Idle);
    // Release never triggers playback.
    assert_eq!(dispatcher.samples().backend().play_count(), 1);
}

/// Pressing the 'W' key resolves to C# and plays its sample.
#[test]
fn test_press_w_plays_c_sharp() {
    let bindings = KeyBindings::new();
    let mut dispatcher = dispatcher_with(&Note::ALL);

    let note = bindings.note_for(KeyCode::W).unwrap();
    assert_eq!(note, Note::Cs);

    dispatcher.on_press(note);
    assert_eq!(dispatcher.samples().backend().play_count(), 1);
    assert_eq!(dispatcher.visual(Note::Cs), KeyVisual::Pressed);
}

/// Every bound key plays exactly one sample per press.
#[test]
fn test_every_binding_plays_once() {
    let bindings = KeyBindings::new();
    let mut dispatcher = dispatcher_with(&Note::ALL);

    for binding in bindings.entries() {
        dispatcher.on_press(binding.note);
    }
    assert_eq!(dispatcher.samples().backend().play_count(), 12);
}

/// Unbound key codes resolve to nothing, so no dispatch happens.
#[test]
fn test_unbound_key_is_noop() {
    let bindings = KeyBindings::new();
    assert_eq!(bindings.note_for(KeyCode::Q), None);
    assert_eq!(bindings.note_for(KeyCode::Enter), None);
}

/// Notes with no sample on disk still highlight but stay silent.
#[test]
fn test_missing_sample_is_visual_only() {
    let mut dispatcher = dispatcher_with(&[Note::C, Note::D]);

    dispatcher.on_press(Note::Gs);
    assert_eq!(dispatcher.visual(Note::Gs), KeyVisual::Pressed);
    assert!(dispatcher.samples().backend().played.is_empty());
}

/// Key states are independent across notes.
#[test]
fn test_note_independence() {
    let mut dispatcher = dispatcher_with(&Note::ALL);

    dispatcher.on_press(Note::C);
    dispatcher.on_press(Note::E);
    assert_eq!(dispatcher.visual(Note::C), KeyVisual::Pressed);
    assert_eq!(dispatcher.visual(Note::E), KeyVisual::Pressed);
    assert_eq!(dispatcher.visual(Note::D), KeyVisual::Idle);

    dispatcher.on_release(Note::C);
    assert_eq!(dispatcher.visual(Note::C), KeyVisual::Idle);
    assert_eq!(dispatcher.visual(Note::E), KeyVisual::Pressed);
}
