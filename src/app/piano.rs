use macroquad::prelude::*;

use crate::app::dispatcher::NoteDispatcher;
use crate::input::{KeyBindings, KeyState, KeyboardInput};
use crate::model::{NOTE_COUNT, Note};
use crate::render::{KeyboardLayout, KeyboardView};
use crate::traits::audio::AudioBackend;

/// Top-level widget state: owns the dispatcher and wires per-frame input
/// polling to it. Constructed once at process start.
pub struct PianoApp<A: AudioBackend> {
    dispatcher: NoteDispatcher<A>,
    bindings: KeyBindings,
    keyboard: KeyboardInput,
    key_states: [KeyState; NOTE_COUNT],
    view: KeyboardView,
    layout: KeyboardLayout,
    /// Note currently held by the mouse, if any.
    mouse_held: Option<Note>,
    show_help: bool,
}

impl<A: AudioBackend> PianoApp<A> {
    pub fn new(dispatcher: NoteDispatcher<A>) -> Self {
        Self {
            dispatcher,
            bindings: KeyBindings::new(),
            keyboard: KeyboardInput::new(),
            key_states: [KeyState::default(); NOTE_COUNT],
            view: KeyboardView::new(),
            // Recomputed from the window size on every update.
            layout: KeyboardLayout::new(800.0, 400.0),
            mouse_held: None,
            show_help: false,
        }
    }

    /// Poll input and dispatch note events. Call once per frame.
    pub fn update(&mut self) {
        self.layout = KeyboardLayout::new(screen_width(), screen_height());

        if is_key_pressed(KeyCode::F1) {
            self.show_help = !self.show_help;
        }

        for state in &mut self.key_states {
            state.reset_frame_state();
        }
        let changes = self.keyboard.update(&self.bindings, &mut self.key_states);
        for (note, pressed) in changes {
            self.handle_key_event(note, pressed);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            if let Some(note) = self.layout.hit_test(vec2(mx, my)) {
                self.handle_mouse_press(note);
            }
        }
        if is_mouse_button_released(MouseButton::Left) {
            self.handle_mouse_release();
        }
    }

    /// Apply a keyboard press or release edge for a bound note.
    fn handle_key_event(&mut self, note: Note, pressed: bool) {
        if pressed {
            self.dispatcher.on_press(note);
        } else if self.mouse_held != Some(note) {
            // The mouse may still be holding the same note.
            self.dispatcher.on_release(note);
        }
    }

    /// Apply a mouse press resolved to a key.
    fn handle_mouse_press(&mut self, note: Note) {
        self.dispatcher.on_press(note);
        self.mouse_held = Some(note);
    }

    /// Revert the mouse-held note, if any. Playback is one-shot, so this
    /// only affects the visual.
    fn handle_mouse_release(&mut self) {
        if let Some(note) = self.mouse_held.take() {
            // The keyboard may still be holding the same note.
            if !self.key_states[note.index()].pressed {
                self.dispatcher.on_release(note);
            }
        }
    }

    /// Draw the current frame.
    pub fn draw(&self) {
        clear_background(Color::new(0.16, 0.16, 0.18, 1.0));
        self.view.draw(
            &self.layout,
            self.dispatcher.visuals(),
            &self.bindings,
            self.show_help,
        );
    }
}
