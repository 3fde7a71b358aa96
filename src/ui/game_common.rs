//! Shared drawing helpers for every screen.
//!
//! Screens describe a picture in playfield units (a sunset gradient plus
//! sprite blits); this module samples it into terminal cells using half
//! blocks, so each cell shows two vertically stacked pixels.

use crate::assets::{Rgb, Sprite};
use crate::game::Rect as FieldRect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

const PURPLE: Rgb = Rgb(40, 0, 60);
const PINK: Rgb = Rgb(255, 100, 180);
const ORANGE: Rgb = Rgb(255, 140, 60);

/// Height of one gradient band in playfield units.
const GRADIENT_BAND: f64 = 4.0;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

const MIN_COLS: u16 = 16;
const MIN_ROWS: u16 = 8;

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t) as u8;
    Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Sunset background: purple at the top fading through pink into orange,
/// flat orange over the bottom third. Drawn in bands, not a smooth ramp.
pub fn gradient_color(y: f64, field_height: f64) -> Rgb {
    let band_y = (y.max(0.0) / GRADIENT_BAND).floor() * GRADIENT_BAND;
    let t = band_y / field_height;
    if t < 0.33 {
        lerp(PURPLE, PINK, t / 0.33)
    } else if t < 0.66 {
        lerp(PINK, ORANGE, (t - 0.33) / 0.33)
    } else {
        ORANGE
    }
}

/// A sprite stretched over a playfield rectangle.
pub struct Blit<'a> {
    pub sprite: &'a Sprite,
    pub rect: FieldRect,
    pub flipped: bool,
}

impl<'a> Blit<'a> {
    pub fn new(sprite: &'a Sprite, rect: FieldRect) -> Self {
        Self {
            sprite,
            rect,
            flipped: false,
        }
    }

    pub fn flipped(sprite: &'a Sprite, rect: FieldRect) -> Self {
        Self {
            sprite,
            rect,
            flipped: true,
        }
    }

    fn sample(&self, x: f64, y: f64) -> Option<Rgb> {
        if !self.rect.contains_point(x, y) {
            return None;
        }
        let u = (x - self.rect.x) / self.rect.width;
        let v = (y - self.rect.y) / self.rect.height;
        if self.flipped {
            self.sprite.sample_flipped(u, v)
        } else {
            self.sprite.sample(u, v)
        }
    }
}

/// Color of one playfield point: the topmost opaque blit, else the sky.
pub fn pixel_at(x: f64, y: f64, blits: &[Blit], field_height: f64) -> Rgb {
    blits
        .iter()
        .rev()
        .find_map(|blit| blit.sample(x, y))
        .unwrap_or_else(|| gradient_color(y, field_height))
}

/// Mapping between the playfield and a block of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub field_width: f64,
    pub field_height: f64,
}

impl Viewport {
    /// Largest centered area inside `outer` with the playfield's aspect ratio.
    pub fn fit(outer: Rect, field_width: f64, field_height: f64) -> Self {
        let target = field_width / field_height * CELL_ASPECT;
        let (width, height) = if outer.height as f64 * target <= outer.width as f64 {
            ((outer.height as f64 * target).round() as u16, outer.height)
        } else {
            (outer.width, (outer.width as f64 / target).round() as u16)
        };
        let width = width.min(outer.width);
        let height = height.min(outer.height);
        Self {
            area: Rect::new(
                outer.x + (outer.width - width) / 2,
                outer.y + (outer.height - height) / 2,
                width,
                height,
            ),
            field_width,
            field_height,
        }
    }

    pub fn is_too_small(&self) -> bool {
        self.area.width < MIN_COLS || self.area.height < MIN_ROWS
    }

    /// Playfield x at the center of a column offset.
    pub fn field_x(&self, col: u16) -> f64 {
        (col as f64 + 0.5) * self.field_width / self.area.width as f64
    }

    /// Playfield y at the center of a half-row offset (two per cell).
    pub fn field_y(&self, half_row: u16) -> f64 {
        (half_row as f64 + 0.5) * self.field_height / (self.area.height as f64 * 2.0)
    }

    /// Terminal row showing playfield height `y`.
    pub fn row_for(&self, y: f64) -> u16 {
        let offset = (y / self.field_height * self.area.height as f64).floor();
        let offset = offset.clamp(0.0, self.area.height.saturating_sub(1) as f64);
        self.area.y + offset as u16
    }
}

/// Paint the playfield picture into the viewport.
pub fn render_playfield(frame: &mut Frame, viewport: &Viewport, blits: &[Blit]) {
    let area = viewport.area;
    let mut lines = Vec::with_capacity(area.height as usize);

    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let x = viewport.field_x(col);
            let top = pixel_at(x, viewport.field_y(row * 2), blits, viewport.field_height);
            let bottom = pixel_at(x, viewport.field_y(row * 2 + 1), blits, viewport.field_height);
            spans.push(Span::styled(
                "▀",
                Style::default().fg(to_color(top)).bg(to_color(bottom)),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw a line of text centered horizontally at playfield height `y`.
///
/// Only the foreground is set, so the picture's background shows through.
pub fn render_text_at(frame: &mut Frame, viewport: &Viewport, y: f64, text: &str, style: Style) {
    let row = viewport.row_for(y);
    let paragraph = Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center);
    frame.render_widget(
        paragraph,
        Rect::new(viewport.area.x, row, viewport.area.width, 1),
    );
}

/// Bold text with a dark shadow line directly beneath it.
pub fn render_title_at(frame: &mut Frame, viewport: &Viewport, y: f64, text: &str, color: Color) {
    let row = viewport.row_for(y);
    if row + 1 < viewport.area.y + viewport.area.height {
        let shadow = Paragraph::new(Span::styled(
            "▀".repeat(text.chars().count()),
            Style::default().fg(Color::Black),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(
            shadow,
            Rect::new(viewport.area.x, row + 1, viewport.area.width, 1),
        );
    }
    render_text_at(
        frame,
        viewport,
        y,
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );
}

/// Split the screen into the playfield (centered) and a 2-line status bar.
pub fn create_screen_layout(area: Rect, field_width: f64, field_height: f64) -> (Viewport, Rect) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MIN_ROWS), Constraint::Length(2)])
        .split(area);
    (
        Viewport::fit(v_chunks[0], field_width, field_height),
        v_chunks[1],
    )
}

/// Key labels shown in the footer; they match `input::map_key_event`.
const JUMP_KEYS: &str = "[Space/Click]";
const QUIT_KEYS: &str = "[Esc/q]";

/// Two-line footer: a status message, then what jump and quit do on this screen.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    status_color: Color,
    jump_action: &str,
) {
    if area.height == 0 {
        return;
    }
    let message = Paragraph::new(Span::styled(status, Style::default().fg(status_color)))
        .alignment(Alignment::Center);
    frame.render_widget(message, Rect::new(area.x, area.y, area.width, 1));

    if area.height < 2 {
        return;
    }
    let key = Style::default().fg(Color::White);
    let action = Style::default().fg(Color::DarkGray);
    let bindings = Line::from(vec![
        Span::styled(JUMP_KEYS, key),
        Span::styled(format!(" {}  ", jump_action), action),
        Span::styled(QUIT_KEYS, key),
        Span::styled(" Quit", action),
    ]);
    frame.render_widget(
        Paragraph::new(bindings).alignment(Alignment::Center),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

/// Shown instead of the playfield when the terminal cannot fit it.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let y = area.y + area.height / 2;
    let message = Paragraph::new(Span::styled(
        "Terminal too small",
        Style::default().fg(Color::Yellow),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message, Rect::new(area.x, y, area.width, area.height.min(1)));
}
