use macroquad::prelude::{Rect, Vec2};

use crate::model::Note;

// Base key dimensions at scale 1.0, scaled to fit the window.
const WHITE_KEY_W: f32 = 80.0;
const WHITE_KEY_H: f32 = 300.0;
const BLACK_KEY_W: f32 = 50.0;
const BLACK_KEY_H: f32 = 180.0;
const MARGIN: f32 = 20.0;

/// White key indices whose right boundary carries a black key
/// (C#, D#, F#, G#, A#). There is no black key after E and B.
const BLACK_AFTER_WHITE: [usize; 5] = [0, 1, 3, 4, 5];

/// A key's note and its on-screen rectangle.
#[derive(Debug, Clone, Copy)]
pub struct KeyRect {
    pub note: Note,
    pub rect: Rect,
}

/// Geometry of the one-octave keyboard, scaled to the window size.
pub struct KeyboardLayout {
    whites: [KeyRect; 7],
    blacks: [KeyRect; 5],
}

impl KeyboardLayout {
    /// Compute the layout for a window of the given size. Keys are centered
    /// horizontally and anchored below the top margin.
    pub fn new(screen_w: f32, screen_h: f32) -> Self {
        let scale_w = (screen_w - 2.0 * MARGIN) / (7.0 * WHITE_KEY_W);
        let scale_h = (screen_h - 4.0 * MARGIN) / WHITE_KEY_H;
        let scale = scale_w.min(scale_h).min(1.5).max(0.1);

        let white_w = WHITE_KEY_W * scale;
        let white_h = WHITE_KEY_H * scale;
        let black_w = BLACK_KEY_W * scale;
        let black_h = BLACK_KEY_H * scale;

        let origin_x = (screen_w - 7.0 * white_w) / 2.0;
        let origin_y = MARGIN * 2.0;

        let whites = std::array::from_fn(|i| KeyRect {
            note: Note::WHITE[i],
            rect: Rect::new(origin_x + i as f32 * white_w, origin_y, white_w, white_h),
        });

        let blacks = std::array::from_fn(|i| {
            let boundary_x = origin_x + (BLACK_AFTER_WHITE[i] + 1) as f32 * white_w;
            KeyRect {
                note: Note::BLACK[i],
                rect: Rect::new(boundary_x - black_w / 2.0, origin_y, black_w, black_h),
            }
        });

        Self { whites, blacks }
    }

    /// Resolve a mouse position to the key under it. Black keys sit on top
    /// of the white keys, so they take priority.
    pub fn hit_test(&self, point: Vec2) -> Option<Note> {
        for key in &self.blacks {
            if key.rect.contains(point) {
                return Some(key.note);
            }
        }
        for key in &self.whites {
            if key.rect.contains(point) {
                return Some(key.note);
            }
        }
        None
    }

    pub fn white_keys(&self) -> &[KeyRect; 7] {
        &self.whites
    }

    pub fn black_keys(&self) -> &[KeyRect; 5] {
        &self.blacks
    }

    /// Bottom edge of the white keys, used to place the help line.
    pub fn bottom(&self) -> f32 {
        let rect = self.whites[0].rect;
        rect.y + rect.h
    }
}
