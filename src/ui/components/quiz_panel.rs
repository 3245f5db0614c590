use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::quiz::{CELEBRATION_THRESHOLD, Feedback, Quiz, QuizPhase};
use crate::ui::components::button::Button;
use crate::ui::components::score_bar::ScoreBar;
use crate::ui::layout::QuizPanelLayout;
use crate::ui::theme::Theme;

pub struct QuizPanel<'a> {
    quiz: &'a Quiz,
    layout: &'a QuizPanelLayout,
    theme: &'a Theme,
}

impl<'a> QuizPanel<'a> {
    pub fn new(quiz: &'a Quiz, layout: &'a QuizPanelLayout, theme: &'a Theme) -> Self {
        Self {
            quiz,
            layout,
            theme,
        }
    }
}

impl Widget for QuizPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Block::bordered()
            .title(format!(" {} ", t!("quiz.title")))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()))
            .render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            t!("quiz.question").to_string(),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(self.layout.question, buf);

        if let Some(question) = self.quiz.question() {
            let reveal = self.quiz.phase() == QuizPhase::Answered;
            for (i, (option, rect)) in question
                .options
                .iter()
                .zip(self.layout.options.iter())
                .enumerate()
            {
                let label = format!("[{}] {option}", i + 1);
                let is_answer = reveal && *option == question.correct;
                let border = if is_answer {
                    colors.success()
                } else if reveal {
                    colors.accent_dim()
                } else {
                    colors.border()
                };
                Button::new(&label, colors.button_fg(), colors.button_bg())
                    .border(border)
                    .bold(is_answer)
                    .render(*rect, buf);
            }
        }

        let feedback = match self.quiz.feedback() {
            Some(Feedback::Correct) => Some((t!("quiz.correct"), colors.success())),
            Some(Feedback::Incorrect) => Some((t!("quiz.incorrect"), colors.error())),
            None => None,
        };
        if let Some((text, color)) = feedback {
            Paragraph::new(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .render(self.layout.feedback, buf);
        }

        let label = t!(
            "quiz.score",
            score = self.quiz.score(),
            goal = CELEBRATION_THRESHOLD
        );
        ScoreBar::new(&label, self.quiz.score(), CELEBRATION_THRESHOLD, self.theme)
            .render(self.layout.score, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::clock::Clock;

    #[test]
    fn test_renders_all_options() {
        let theme = Theme::default();
        let mut quiz = Quiz::default();
        let mut clock = Clock::default();
        let mut rng = SmallRng::seed_from_u64(3);
        quiz.toggle_mode(&mut clock, &mut rng);

        let area = Rect::new(0, 0, 48, 16);
        let layout = QuizPanelLayout::new(area);
        let mut buf = Buffer::empty(area);
        QuizPanel::new(&quiz, &layout, &theme).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        for option in &quiz.question().unwrap().options {
            assert!(text.contains(&option.to_string()), "missing {option}");
        }
        assert!(text.contains("[4]"));
    }

    #[test]
    fn test_answered_highlights_correct_and_dims_the_rest() {
        let theme = Theme::default();
        let colors = &theme.colors;
        let mut quiz = Quiz::default();
        let mut clock = Clock::default();
        let mut rng = SmallRng::seed_from_u64(8);
        quiz.toggle_mode(&mut clock, &mut rng);
        let question = quiz.question().unwrap().clone();
        let correct = question
            .options
            .iter()
            .position(|o| *o == question.correct)
            .unwrap();
        quiz.select_option(correct, Instant::now());
        assert_eq!(quiz.phase(), QuizPhase::Answered);

        let area = Rect::new(0, 0, 48, 16);
        let layout = QuizPanelLayout::new(area);
        let mut buf = Buffer::empty(area);
        QuizPanel::new(&quiz, &layout, &theme).render(area, &mut buf);

        for (i, rect) in layout.options.iter().enumerate() {
            let expected = if i == correct {
                colors.success()
            } else {
                colors.accent_dim()
            };
            assert_eq!(buf[(rect.x, rect.y)].fg, expected, "option {i}");
        }
    }
}
