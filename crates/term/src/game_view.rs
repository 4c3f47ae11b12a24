//! GameView: maps the game snapshot and terminal display state into a
//! framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout is
//! used for drawing and for mouse hit testing, so a click always lands on
//! the pad the player sees.

use crate::core::{Display, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
use crate::term_display::{Banner, TermDisplay};
use crate::types::{Choice, Phase, CHOICES};

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

/// Screen geometry for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Border around the pad grid.
    pub frame: Rect,
    /// Pads in [`CHOICES`] order.
    pub pads: [Rect; 4],
}

impl Layout {
    pub fn pad(&self, choice: Choice) -> Rect {
        self.pads[choice.index()]
    }

    pub fn hit(&self, x: u16, y: u16) -> Option<Choice> {
        CHOICES.into_iter().find(|c| self.pad(*c).contains(x, y))
    }
}

const BG: Rgb = Rgb::new(20, 20, 28);
const PANEL_MIN_W: u16 = 14;

/// A lightweight terminal renderer for the Simon board.
pub struct GameView {
    /// Pad width in terminal columns.
    pad_w: u16,
    /// Pad height in terminal rows.
    pad_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Roughly square on typical 1:2 terminal glyphs.
        Self::new(14, 5)
    }
}

impl GameView {
    pub fn new(pad_w: u16, pad_h: u16) -> Self {
        Self {
            pad_w: pad_w.max(1),
            pad_h: pad_h.max(1),
        }
    }

    /// Geometry of the board for `viewport`, centered.
    ///
    /// Pads sit one cell inside the border, two columns and one row apart.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = 2 * self.pad_w + 6;
        let frame_h = 2 * self.pad_h + 5;
        let x0 = viewport.width.saturating_sub(frame_w) / 2;
        let y0 = viewport.height.saturating_sub(frame_h) / 2;

        let pad = |col: u16, row: u16| {
            Rect::new(
                x0 + 2 + col * (self.pad_w + 2),
                y0 + 2 + row * (self.pad_h + 1),
                self.pad_w,
                self.pad_h,
            )
        };

        Layout {
            frame: Rect::new(x0, y0, frame_w, frame_h),
            pads: [pad(0, 0), pad(1, 0), pad(0, 1), pad(1, 1)],
        }
    }

    /// Which pad, if any, is under terminal cell `(x, y)`.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<Choice> {
        self.layout(viewport).hit(x, y)
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        display: &TermDisplay,
        banner: &Banner,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);
        fb.fill_rect(layout.frame, ' ', CellStyle::fg(BG).on(BG));
        fb.draw_box(layout.frame, CellStyle::fg(Rgb::new(200, 200, 200)).on(BG));

        for choice in CHOICES {
            self.draw_pad(fb, layout.pad(choice), choice, display);
        }

        self.draw_side_panel(fb, snap, display, viewport, layout.frame);

        if let Some(text) = banner.text() {
            draw_banner(fb, layout.frame, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        display: &TermDisplay,
        banner: &Banner,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, display, banner, viewport, &mut fb);
        fb
    }

    fn draw_pad(&self, fb: &mut FrameBuffer, rect: Rect, choice: Choice, display: &TermDisplay) {
        let lit = display.is_lit(choice);
        let base = pad_color(choice);
        let style = CellStyle {
            fg: if lit { base } else { base.scaled(2, 5) },
            bg: BG,
            bold: lit,
            dim: !display.is_listener_attached(choice),
        };
        fb.fill_rect(rect, if lit { '█' } else { '▓' }, style);

        let label = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: style.fg,
            bold: true,
            dim: false,
        };
        let cx = rect.x + rect.w / 2;
        let cy = rect.y + rect.h / 2;
        fb.put_u32(cx, cy, choice.index() as u32 + 1, label);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        display: &TermDisplay,
        viewport: Viewport,
        frame: Rect,
    ) {
        let panel_x = frame.right().saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let dim = CellStyle { dim: true, ..value };

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_str(panel_x, y, display.score_text(), value);
        y += 2;

        fb.put_str(panel_x, y, "BEST", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.best_score, value);
        y += 2;

        fb.put_str(panel_x, y, "ROUND", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.round() as u32, value);
        y += 2;

        fb.put_str(panel_x, y, "STATUS", label);
        y += 1;
        match snap.phase {
            Phase::AwaitingNewGame => fb.put_str(panel_x, y, "PRESS N", value),
            Phase::PlayingBackSequence => fb.put_str(panel_x, y, "WATCH", value),
            Phase::AwaitingPlayerInput => {
                fb.put_str(panel_x, y, "YOUR TURN", value);
                y += 1;
                fb.put_u32(panel_x, y, snap.player_progress as u32, dim);
                fb.put_char(panel_x + 3, y, '/', dim);
                fb.put_u32(panel_x + 5, y, snap.sequence_len as u32, dim);
            }
        }
        y += 2;

        for line in ["1-4 press", "N   new game", "Q   quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y += 1;
        }
    }
}

fn draw_banner(fb: &mut FrameBuffer, frame: Rect, text: &str) {
    let w = text.chars().count() as u16 + 4;
    let x = frame.x + frame.w.saturating_sub(w) / 2;
    let y = frame.y + frame.h / 2;
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(170, 30, 30),
        bold: true,
        dim: false,
    };
    fb.fill_rect(Rect::new(x, y, w, 1), ' ', style);
    fb.put_str(x + 2, y, text, style);
}

fn pad_color(choice: Choice) -> Rgb {
    match choice {
        Choice::Button1 => Rgb::new(60, 200, 90),
        Choice::Button2 => Rgb::new(220, 60, 60),
        Choice::Button3 => Rgb::new(240, 210, 60),
        Choice::Button4 => Rgb::new(60, 120, 230),
    }
}
