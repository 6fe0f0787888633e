use macroquad::prelude::*;

use crate::input::KeyBindings;
use crate::model::{KeyVisual, NOTE_COUNT};
use crate::render::layout::{KeyRect, KeyboardLayout};

// Key face colors.
const WHITE_IDLE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const WHITE_PRESSED: Color = Color::new(0.867, 0.867, 0.867, 1.0); // #ddd
const BLACK_IDLE: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const BLACK_PRESSED: Color = Color::new(0.333, 0.333, 0.333, 1.0); // #555
const KEY_BORDER: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Draws the keyboard and the help text.
pub struct KeyboardView;

impl KeyboardView {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(
        &self,
        layout: &KeyboardLayout,
        visuals: &[KeyVisual; NOTE_COUNT],
        bindings: &KeyBindings,
        show_help: bool,
    ) {
        // White keys first, black keys on top.
        for key in layout.white_keys() {
            let pressed = visuals[key.note.index()].is_pressed();
            let color = if pressed { WHITE_PRESSED } else { WHITE_IDLE };
            draw_rectangle(key.rect.x, key.rect.y, key.rect.w, key.rect.h, color);
            draw_rectangle_lines(key.rect.x, key.rect.y, key.rect.w, key.rect.h, 2.0, KEY_BORDER);
            self.draw_labels(key, bindings, BLACK);
        }

        for key in layout.black_keys() {
            let pressed = visuals[key.note.index()].is_pressed();
            let color = if pressed { BLACK_PRESSED } else { BLACK_IDLE };
            draw_rectangle(key.rect.x, key.rect.y, key.rect.w, key.rect.h, color);
            self.draw_labels(key, bindings, WHITE);
        }

        let hint_y = layout.bottom() + 24.0;
        draw_text(
            "Keys: A S D F G H J for white, W E T Y U for black. F1 toggles help.",
            20.0,
            hint_y,
            20.0,
            LIGHTGRAY,
        );

        if show_help {
            self.draw_help_overlay();
        }
    }

    fn draw_labels(&self, key: &KeyRect, bindings: &KeyBindings, text_color: Color) {
        let rect = key.rect;
        if let Some(label) = bindings.label_for(key.note) {
            draw_text(
                &label.to_string(),
                rect.x + rect.w / 2.0 - 6.0,
                rect.y + rect.h - 14.0,
                22.0,
                text_color,
            );
        }
        draw_text(
            key.note.name(),
            rect.x + 6.0,
            rect.y + 20.0,
            16.0,
            text_color,
        );
    }

    fn draw_help_overlay(&self) {
        let lines = [
            "Controls:",
            "White keys: A (C), S (D), D (E), F (F), G (G), H (A), J (B)",
            "Black keys: W (C#), E (D#), T (F#), Y (G#), U (A#)",
        ];
        let w = 560.0;
        let h = 110.0;
        let x = (screen_width() - w) / 2.0;
        let y = (screen_height() - h) / 2.0;

        draw_rectangle(x, y, w, h, Color::new(0.1, 0.1, 0.15, 0.95));
        draw_rectangle_lines(x, y, w, h, 2.0, LIGHTGRAY);
        for (i, line) in lines.iter().enumerate() {
            draw_text(line, x + 16.0, y + 30.0 + i as f32 * 28.0, 20.0, WHITE);
        }
    }
}

impl Default for KeyboardView {
    fn default() -> Self {
        Self::new()
    }
}
