use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};

/// A bordered, clickable label. Hit testing is done against the same `Rect`
/// the button was rendered into.
pub struct Button<'a> {
    label: &'a str,
    fg: Color,
    bg: Color,
    border: Color,
    bold: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, fg: Color, bg: Color) -> Self {
        Self {
            label,
            fg,
            bg,
            border: fg,
            bold: false,
        }
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(Style::default().fg(self.border))
            .style(Style::default().bg(self.bg));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut style = Style::default().fg(self.fg).bg(self.bg);
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        Paragraph::new(Line::from(self.label))
            .style(style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
