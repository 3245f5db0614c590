use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::clock::Clock;
use crate::ui::theme::Theme;

/// The `H:MM` readout shown beside the face in play mode.
pub struct DigitalReadout<'a> {
    clock: &'a Clock,
    theme: &'a Theme,
}

impl<'a> DigitalReadout<'a> {
    pub fn new(clock: &'a Clock, theme: &'a Theme) -> Self {
        Self { clock, theme }
    }
}

impl Widget for DigitalReadout<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", t!("readout.title")))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(inner);

        let time = self.clock.time();
        let line = Line::from(vec![
            Span::styled(
                time.hour.to_string(),
                Style::default()
                    .fg(colors.hour_hand())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(":", Style::default().fg(colors.fg())),
            Span::styled(
                format!("{:02}", time.minute),
                Style::default()
                    .fg(colors.minute_hand())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockTime;

    #[test]
    fn test_shows_padded_minutes() {
        let theme = Theme::default();
        let clock = Clock::new(ClockTime { hour: 7, minute: 5 });
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        DigitalReadout::new(&clock, &theme).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("7:05"));
    }
}
