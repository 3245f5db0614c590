use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Widget};

use crate::clock::Clock;
use crate::ui::theme::Theme;

const FACE_RADIUS: f64 = 0.96;
const TICK_RADIUS: f64 = 0.9;
const MARKER_RADIUS: f64 = 0.76;
const MINUTE_HAND_LENGTH: f64 = 0.72;
const HOUR_HAND_LENGTH: f64 = 0.46;

pub struct ClockFace<'a> {
    clock: &'a Clock,
    theme: &'a Theme,
    cell_aspect: f64,
}

impl<'a> ClockFace<'a> {
    pub fn new(clock: &'a Clock, theme: &'a Theme, cell_aspect: f64) -> Self {
        Self {
            clock,
            theme,
            cell_aspect,
        }
    }
}

/// Canvas bounds that keep a unit circle round inside `area`.
pub fn canvas_bounds(area: Rect, cell_aspect: f64) -> ([f64; 2], [f64; 2]) {
    let visual_w = area.width.max(1) as f64;
    let visual_h = area.height.max(1) as f64 * cell_aspect;
    let ratio = visual_w / visual_h;
    if ratio >= 1.0 {
        ([-ratio, ratio], [-1.0, 1.0])
    } else {
        ([-1.0, 1.0], [-1.0 / ratio, 1.0 / ratio])
    }
}

/// Point at `radius` along a clockwise angle measured from 12 o'clock.
pub fn polar(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (radius * rad.sin(), radius * rad.cos())
}

fn hand(angle_deg: f64, length: f64, color: ratatui::style::Color) -> CanvasLine {
    let (x2, y2) = polar(angle_deg, length);
    CanvasLine {
        x1: 0.0,
        y1: 0.0,
        x2,
        y2,
        color,
    }
}

impl Widget for ClockFace<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let border = if self.clock.is_dragging() {
            colors.border_focused()
        } else {
            colors.border()
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 2 {
            return;
        }

        let (x_bounds, y_bounds) = canvas_bounds(inner, self.cell_aspect);
        let cell_width = (x_bounds[1] - x_bounds[0]) / inner.width as f64;

        let ticks: Vec<(f64, f64)> = (0..60)
            .map(|m| polar(m as f64 * 6.0, TICK_RADIUS))
            .collect();
        let minute_angle = self.clock.minute_hand_angle();
        let hour_angle = self.clock.hour_hand_angle();
        let marker_style = Style::default()
            .fg(colors.marker())
            .add_modifier(Modifier::BOLD);

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(colors.bg())
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: FACE_RADIUS,
                    color: colors.face(),
                });
                ctx.draw(&Points {
                    coords: &ticks,
                    color: colors.tick(),
                });
                ctx.layer();
                ctx.draw(&hand(hour_angle, HOUR_HAND_LENGTH, colors.hour_hand()));
                ctx.draw(&hand(minute_angle, MINUTE_HAND_LENGTH, colors.minute_hand()));
                ctx.layer();
                for hour in 1..=12u8 {
                    let label = hour.to_string();
                    let (x, y) = polar(f64::from(hour) * 30.0, MARKER_RADIUS);
                    let offset = cell_width * label.len() as f64 / 2.0;
                    ctx.print(x - offset, y, Span::styled(label, marker_style));
                }
            })
            .render(inner, buf);
    }
}
