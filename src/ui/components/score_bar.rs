use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Progress toward the celebration threshold.
pub struct ScoreBar<'a> {
    pub label: String,
    pub score: u32,
    pub goal: u32,
    pub theme: &'a Theme,
}

impl<'a> ScoreBar<'a> {
    pub fn new(label: &str, score: u32, goal: u32, theme: &'a Theme) -> Self {
        Self {
            label: label.to_string(),
            score,
            goal,
            theme,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.goal == 0 {
            return 1.0;
        }
        (self.score as f64 / self.goal as f64).clamp(0.0, 1.0)
    }
}

impl Widget for ScoreBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio() * inner.width as f64) as u16;
        let stars = format!("{} ★", self.score);

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let width = stars.chars().count() as u16;
        let label_x = inner.x + (inner.width.saturating_sub(width)) / 2;
        buf.set_string(label_x, inner.y, &stars, Style::default().fg(colors.fg()));
    }
}
