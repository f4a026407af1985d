//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//! ┌────────────────────────────────┐
//! │           Simon Says           │
//! │                                │
//! │  ██████████████  ████████████  │   red  | yellow
//! │  ...                           │
//! │  ██████████████  ████████████  │   blue | green
//! │                                │
//! │            Steps: 3            │
//! │        Strict Mode: Off        │
//! │      Wait for user input       │
//! │                                │
//! │          [ Restart ]           │
//! └────────────────────────────────┘
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.w && y < self.y + self.h
    }

    pub fn center(&self) -> (u16, u16) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Where each element of the board lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame: Rect,
    /// Pads in [`Color::ALL`] order.
    pub pads: [Rect; 4],
    pub title_y: u16,
    pub steps_y: u16,
    pub strict_y: u16,
    pub message_y: u16,
    pub control_y: u16,
    /// Left column of the side panel, when the viewport has room for it.
    pub panel_x: Option<u16>,
}

impl Layout {
    pub fn pad(&self, color: Color) -> Rect {
        self.pads[color.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the Simon board.
pub struct GameView {
    /// Pad width in terminal columns.
    pad_w: u16,
    /// Pad height in terminal rows.
    pad_h: u16,
    anchor_y: AnchorY,
}

const PAD_GAP_X: u16 = 2;
const PANEL_MIN_W: u16 = 16;

impl Default for GameView {
    fn default() -> Self {
        // 14 columns leaves room for the longest state message.
        Self {
            pad_w: 14,
            pad_h: 5,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(pad_w: u16, pad_h: u16) -> Self {
        Self {
            pad_w,
            pad_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Compute element positions for `viewport`.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = 2 * self.pad_w + PAD_GAP_X + 4;
        // border, title, blank, pads (with one gap row), blank, steps, strict,
        // message, blank, control, border
        let frame_h = 2 * self.pad_h + 11;

        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let left = x + 2;
        let right = left + self.pad_w + PAD_GAP_X;
        let top = y + 3;
        let bottom = top + self.pad_h + 1;
        let pad = |px, py| Rect {
            x: px,
            y: py,
            w: self.pad_w,
            h: self.pad_h,
        };

        let steps_y = bottom + self.pad_h + 1;
        let panel_x = x.saturating_add(frame_w).saturating_add(2);
        let panel_x = (panel_x < viewport.width && viewport.width - panel_x >= PANEL_MIN_W)
            .then_some(panel_x);

        Layout {
            frame: Rect {
                x,
                y,
                w: frame_w,
                h: frame_h,
            },
            pads: [
                pad(left, top),
                pad(right, top),
                pad(left, bottom),
                pad(right, bottom),
            ],
            title_y: y + 1,
            steps_y,
            strict_y: steps_y + 1,
            message_y: steps_y + 2,
            control_y: steps_y + 4,
            panel_x,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let frame = layout.frame;

        let card = CellStyle::new(Rgb::new(220, 220, 220), CARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), CARD_BG);

        fb.fill_rect(frame.x, frame.y, frame.w, frame.h, ' ', card);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, border);

        fb.put_str_centered(frame.x, frame.w, layout.title_y, "Simon Says", card.bold());

        for color in Color::ALL {
            self.draw_pad(fb, layout.pad(color), color, snap.active_color);
        }

        self.draw_status(fb, snap, &layout, card);

        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, snap, viewport, panel_x, frame.y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_pad(&self, fb: &mut FrameBuffer, rect: Rect, color: Color, active: Option<Color>) {
        let style = pad_style(color, active);
        fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
        let (cx, cy) = rect.center();
        fb.put_char(cx, cy, pad_key(color), style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout, card: CellStyle) {
        let frame = layout.frame;

        // "Steps: N"
        let label = "Steps: ";
        let digits = digit_count(snap.steps as u32);
        let w = label.len() as u16 + digits;
        let x = frame.x + frame.w.saturating_sub(w) / 2;
        fb.put_str(x, layout.steps_y, label, card);
        fb.put_u32(x + label.len() as u16, layout.steps_y, snap.steps as u32, card.bold());

        // "Strict Mode: Off|On"
        let label = "Strict Mode: ";
        let (value, value_style) = if snap.strict_mode {
            ("On", CellStyle::new(Rgb::new(255, 200, 80), CARD_BG).bold())
        } else {
            ("Off", card.dim())
        };
        let w = (label.len() + value.len()) as u16;
        let x = frame.x + frame.w.saturating_sub(w) / 2;
        fb.put_str(x, layout.strict_y, label, card);
        fb.put_str(x + label.len() as u16, layout.strict_y, value, value_style);

        fb.put_str_centered(frame.x, frame.w, layout.message_y, snap.message(), card.bold());

        let control = if snap.start_label() == "Start" {
            "[ Start ]"
        } else {
            "[ Restart ]"
        };
        let control_style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(3, 155, 229)).bold();
        fb.put_str_centered(frame.x, frame.w, layout.control_y, control, control_style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.games, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best_steps as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in KEY_HINTS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

const CARD_BG: Rgb = Rgb::new(55, 71, 79);

const KEY_HINTS: [&str; 7] = [
    "1 2  red yellow",
    "3 4  blue green",
    "arrows  pads",
    "enter  start",
    "r  restart",
    "s  strict",
    "q  quit",
];

/// Style of a pad: lit when it is the active color.
pub fn pad_style(color: Color, active: Option<Color>) -> CellStyle {
    let lit = active == Some(color);
    let style = CellStyle::new(Rgb::new(20, 20, 20), pad_rgb(color, lit));
    if lit {
        style.bold()
    } else {
        style
    }
}

/// Fill color of a pad in its lit or unlit state.
pub fn pad_rgb(color: Color, lit: bool) -> Rgb {
    match (color, lit) {
        (Color::Red, false) => Rgb::new(120, 20, 20),
        (Color::Red, true) => Rgb::new(255, 80, 80),
        (Color::Yellow, false) => Rgb::new(130, 110, 10),
        (Color::Yellow, true) => Rgb::new(255, 240, 90),
        (Color::Blue, false) => Rgb::new(20, 40, 130),
        (Color::Blue, true) => Rgb::new(90, 150, 255),
        (Color::Green, false) => Rgb::new(15, 100, 30),
        (Color::Green, true) => Rgb::new(90, 240, 120),
    }
}

fn pad_key(color: Color) -> char {
    match color {
        Color::Red => '1',
        Color::Yellow => '2',
        Color::Blue => '3',
        Color::Green => '4',
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
