use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use rust_i18n::t;

use crate::app::App;
use crate::ui::components::button::Button;
use crate::ui::components::celebration::Celebration;
use crate::ui::components::clock_face::ClockFace;
use crate::ui::components::digital_readout::DigitalReadout;
use crate::ui::components::quiz_panel::QuizPanel;
use crate::ui::layout::{AppLayout, CelebrationLayout, QuizPanelLayout};

/// Draw one frame and return the layout used, for hit testing.
pub fn render(frame: &mut Frame, app: &App) -> AppLayout {
    let area = frame.area();
    let colors = &app.theme.colors;
    let layout = AppLayout::new(area);

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    render_header(frame, app, &layout);

    frame.render_widget(
        ClockFace::new(&app.clock, app.theme, app.config.cell_aspect),
        layout.face,
    );

    if app.quiz.is_active() {
        let panel_layout = QuizPanelLayout::new(layout.panel);
        frame.render_widget(
            QuizPanel::new(&app.quiz, &panel_layout, app.theme),
            layout.panel,
        );
    } else {
        frame.render_widget(DigitalReadout::new(&app.clock, app.theme), layout.panel);
    }

    let hint = if app.quiz.is_celebrating() {
        t!("footer.celebration")
    } else if app.quiz.is_active() {
        t!("footer.quiz")
    } else {
        t!("footer.play")
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(colors.text_muted()),
    )));
    frame.render_widget(footer, layout.footer);

    if app.quiz.is_celebrating() {
        let overlay = CelebrationLayout::new(area);
        frame.render_widget(Celebration::new(&overlay, app.theme), area);
    }

    layout
}

fn render_header(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;

    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", t!("app.title")),
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", t!("app.subtitle")),
                Style::default()
                    .fg(colors.text_muted())
                    .bg(colors.header_bg()),
            ),
        ]),
    ])
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let (label, fg, bg) = if app.quiz.is_active() {
        (t!("mode.play"), colors.bg(), colors.celebration())
    } else {
        (t!("mode.quiz"), colors.bg(), colors.accent())
    };
    let label = format!("[m] {label}");
    frame.render_widget(
        Button::new(&label, fg, bg).border(bg).bold(true),
        layout.mode_toggle,
    );
}
