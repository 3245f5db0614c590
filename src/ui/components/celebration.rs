use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::quiz::CELEBRATION_THRESHOLD;
use crate::ui::components::button::Button;
use crate::ui::layout::CelebrationLayout;
use crate::ui::theme::Theme;

/// Overlay shown once the score reaches the threshold.
pub struct Celebration<'a> {
    layout: &'a CelebrationLayout,
    theme: &'a Theme,
}

impl<'a> Celebration<'a> {
    pub fn new(layout: &'a CelebrationLayout, theme: &'a Theme) -> Self {
        Self { layout, theme }
    }
}

impl Widget for Celebration<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let dialog = self.layout.dialog;

        Clear.render(dialog, buf);
        Block::bordered()
            .title(format!(" {} ", t!("celebration.title")))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors.celebration()))
            .style(Style::default().bg(colors.bg()))
            .render(dialog, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "★ ★ ★",
                Style::default()
                    .fg(colors.celebration())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                t!("celebration.message", goal = CELEBRATION_THRESHOLD).to_string(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(self.layout.message, buf);

        let label = format!("[r] {}", t!("celebration.restart"));
        Button::new(&label, colors.button_fg(), colors.button_bg())
            .border(colors.accent())
            .bold(true)
            .render(self.layout.restart, buf);
    }
}
