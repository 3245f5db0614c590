use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::layout::Position;
use tracing::{info, warn};

use crate::clock::{Clock, FaceGeometry};
use crate::config::Config;
use crate::event::AppEvent;
use crate::quiz::{AnswerOutcome, Quiz};
use crate::ui::layout::{AppLayout, CelebrationLayout, QuizPanelLayout};
use crate::ui::theme::Theme;

/// What a click at some cell lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    ModeToggle,
    Answer(usize),
    Restart,
    Face,
}

pub struct App {
    pub clock: Clock,
    pub quiz: Quiz,
    pub config: Config,
    pub theme: &'static Theme,
    /// Layout of the last drawn frame, for hit testing.
    pub layout: Option<AppLayout>,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_else(|| {
            warn!(theme = %config.theme, "unknown theme, using default");
            Theme::default()
        });
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        Self::with_rng(config, theme, SmallRng::from_entropy())
    }

    pub fn with_rng(config: Config, theme: &'static Theme, rng: SmallRng) -> Self {
        Self {
            clock: Clock::new(config.start_time),
            quiz: Quiz::new(config.pacing()),
            config,
            theme,
            layout: None,
            should_quit: false,
            rng,
        }
    }

    pub fn set_theme(&mut self, name: &str) -> bool {
        match Theme::load(name) {
            Some(theme) => {
                self.theme = Box::leak(Box::new(theme));
                self.config.theme = name.to_string();
                true
            }
            None => {
                warn!(theme = name, "unknown theme");
                false
            }
        }
    }

    pub fn face_geometry(&self) -> Option<FaceGeometry> {
        self.layout
            .map(|layout| FaceGeometry::new(layout.face_inner, self.config.cell_aspect))
    }

    pub fn click_target(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let layout = self.layout?;
        let pos = Position::new(column, row);

        if layout.mode_toggle.contains(pos) {
            return Some(ClickTarget::ModeToggle);
        }
        if self.quiz.is_celebrating() {
            let overlay = CelebrationLayout::new(layout.area);
            return overlay
                .restart
                .contains(pos)
                .then_some(ClickTarget::Restart);
        }
        if self.quiz.is_active() {
            let panel = QuizPanelLayout::new(layout.panel);
            return panel
                .options
                .iter()
                .position(|rect| rect.contains(pos))
                .map(ClickTarget::Answer);
        }
        self.face_geometry()
            .is_some_and(|face| face.contains(column, row))
            .then_some(ClickTarget::Face)
    }

    pub fn toggle_mode(&mut self) {
        self.clock.end_drag();
        let active = self.quiz.toggle_mode(&mut self.clock, &mut self.rng);
        info!(active, "mode toggled");
    }

    pub fn answer(&mut self, index: usize, now: Instant) -> AnswerOutcome {
        self.quiz.select_option(index, now)
    }

    pub fn restart(&mut self) {
        if self.quiz.is_celebrating() {
            self.quiz.reset_game(&mut self.clock, &mut self.rng);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.quiz.tick(now, &mut self.clock, &mut self.rng);
    }

    /// Keyboard adjustment of the hands; the clock is fixed during a quiz.
    pub fn nudge(&mut self, minutes: i32) {
        if !self.quiz.is_active() && !self.clock.is_dragging() {
            self.clock.nudge(minutes);
        }
    }

    pub fn pointer_down(&mut self, column: u16, row: u16, now: Instant) {
        match self.click_target(column, row) {
            Some(ClickTarget::ModeToggle) => self.toggle_mode(),
            Some(ClickTarget::Answer(index)) => {
                self.answer(index, now);
            }
            Some(ClickTarget::Restart) => self.restart(),
            Some(ClickTarget::Face) => {
                if let Some(face) = self.face_geometry() {
                    self.clock.begin_drag(face.angle_at(column, row));
                }
            }
            None => {}
        }
    }

    /// Pointer motion with the button held. Tracks even outside the face.
    pub fn pointer_drag(&mut self, column: u16, row: u16) {
        if !self.clock.is_dragging() {
            return;
        }
        if let Some(face) = self.face_geometry() {
            self.clock.drag_to(face.angle_at(column, row));
        }
    }

    pub fn pointer_up(&mut self) {
        self.clock.end_drag();
    }

    /// Dispatch one terminal event, then run any transition that came due.
    /// Pointer motion can keep the event queue busy for a long time, so due
    /// transitions must not wait for a quiet `Tick`.
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Key(key) => self.handle_key(key, now),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }
        self.tick(now);
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(ch @ '1'..='4') => {
                let index = ch as usize - '1' as usize;
                self.answer(index, now);
            }
            KeyCode::Right | KeyCode::Char('l') => self.nudge(1),
            KeyCode::Left | KeyCode::Char('h') => self.nudge(-1),
            KeyCode::Up | KeyCode::Char('k') => self.nudge(5),
            KeyCode::Down | KeyCode::Char('j') => self.nudge(-5),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer_down(mouse.column, mouse.row, now)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer_drag(mouse.column, mouse.row)
            }
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(),
            _ => {}
        }
    }
}
