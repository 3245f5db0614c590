pub mod options;
pub mod schedule;

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::clock::{Clock, ClockTime};
use options::{build_options, random_grid_time};
use schedule::Scheduler;

/// Correct answers needed for the celebration.
pub const CELEBRATION_THRESHOLD: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Inactive,
    /// A question is on the clock and answers are accepted.
    Asking,
    /// Answered correctly; waiting for the next question or the celebration.
    Answered,
    Celebrating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// No question was accepting answers.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    NextQuestion,
    Celebrate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    pub advance_delay: Duration,
    pub celebration_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            advance_delay: Duration::from_millis(2000),
            celebration_delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub correct: ClockTime,
    pub options: Vec<ClockTime>,
}

/// Multiple-choice "what time is it?" game played on a [`Clock`].
#[derive(Clone, Debug)]
pub struct Quiz {
    phase: QuizPhase,
    score: u32,
    question: Option<Question>,
    feedback: Option<Feedback>,
    pacing: Pacing,
    scheduler: Scheduler<Transition>,
}

impl Quiz {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            phase: QuizPhase::Inactive,
            score: 0,
            question: None,
            feedback: None,
            pacing,
            scheduler: Scheduler::default(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != QuizPhase::Inactive
    }

    pub fn is_celebrating(&self) -> bool {
        self.phase == QuizPhase::Celebrating
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn has_pending_transition(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Enter or leave quiz mode. Returns whether the quiz is now active.
    pub fn toggle_mode<R: Rng + ?Sized>(&mut self, clock: &mut Clock, rng: &mut R) -> bool {
        if self.is_active() {
            self.scheduler.invalidate();
            self.phase = QuizPhase::Inactive;
            self.question = None;
            self.feedback = None;
            self.score = 0;
            info!("quiz mode off");
        } else {
            self.phase = QuizPhase::Asking;
            self.score = 0;
            info!("quiz mode on");
            self.next_question(clock, rng);
        }
        self.is_active()
    }

    /// Pose a fresh question and show it on the clock.
    pub fn next_question<R: Rng + ?Sized>(&mut self, clock: &mut Clock, rng: &mut R) {
        if !self.is_active() {
            debug!("next_question ignored while inactive");
            return;
        }
        let correct = random_grid_time(rng);
        clock.set_time(correct);
        let options = build_options(correct, rng);
        debug!(%correct, ?options, "question posed");
        self.question = Some(Question { correct, options });
        self.feedback = None;
        self.phase = QuizPhase::Asking;
    }

    pub fn check_answer(&mut self, selected: ClockTime, now: Instant) -> AnswerOutcome {
        if self.phase != QuizPhase::Asking {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.question.as_ref() else {
            return AnswerOutcome::Ignored;
        };

        if selected != question.correct {
            self.feedback = Some(Feedback::Incorrect);
            info!(%selected, correct = %question.correct, "wrong answer");
            return AnswerOutcome::Incorrect;
        }

        self.feedback = Some(Feedback::Correct);
        self.score += 1;
        self.phase = QuizPhase::Answered;
        info!(%selected, score = self.score, "correct answer");

        if self.score >= CELEBRATION_THRESHOLD {
            self.scheduler
                .schedule(Transition::Celebrate, now, self.pacing.celebration_delay);
        } else {
            self.scheduler
                .schedule(Transition::NextQuestion, now, self.pacing.advance_delay);
        }
        AnswerOutcome::Correct
    }

    /// Answer with the option at `index` of the current question.
    pub fn select_option(&mut self, index: usize, now: Instant) -> AnswerOutcome {
        let selected = self
            .question
            .as_ref()
            .and_then(|q| q.options.get(index).copied());
        match selected {
            Some(time) => self.check_answer(time, now),
            None => AnswerOutcome::Ignored,
        }
    }

    /// Play again after the celebration.
    pub fn reset_game<R: Rng + ?Sized>(&mut self, clock: &mut Clock, rng: &mut R) {
        if !self.is_active() {
            return;
        }
        self.scheduler.invalidate();
        self.score = 0;
        self.phase = QuizPhase::Asking;
        info!("quiz restarted");
        self.next_question(clock, rng);
    }

    /// Run any transitions that have come due.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, clock: &mut Clock, rng: &mut R) {
        for transition in self.scheduler.take_due(now) {
            match transition {
                Transition::NextQuestion => self.next_question(clock, rng),
                Transition::Celebrate => {
                    self.phase = QuizPhase::Celebrating;
                    info!(score = self.score, "celebrating");
                }
            }
        }
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(Pacing::default())
    }
}
