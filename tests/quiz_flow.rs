use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use kidclock::clock::{Clock, ClockTime, FaceGeometry};
use kidclock::quiz::options::OPTION_COUNT;
use kidclock::quiz::{AnswerOutcome, CELEBRATION_THRESHOLD, Feedback, Pacing, Quiz, QuizPhase};
use ratatui::layout::Rect;

fn wrong_option(quiz: &Quiz) -> ClockTime {
    let question = quiz.question().unwrap();
    *question
        .options
        .iter()
        .find(|o| **o != question.correct)
        .unwrap()
}

#[test]
fn play_until_celebration_with_mistakes() {
    let mut clock = Clock::default();
    let mut quiz = Quiz::new(Pacing::default());
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut now = Instant::now();

    assert!(quiz.toggle_mode(&mut clock, &mut rng));
    let mut seen = HashSet::new();

    while quiz.phase() != QuizPhase::Celebrating {
        let question = quiz.question().unwrap().clone();
        assert_eq!(clock.time(), question.correct);
        assert_eq!(question.options.len(), OPTION_COUNT);
        seen.insert(question.correct);

        let before = quiz.score();
        let wrong = wrong_option(&quiz);
        assert_eq!(quiz.check_answer(wrong, now), AnswerOutcome::Incorrect);
        assert_eq!(quiz.score(), before);
        assert_eq!(quiz.feedback(), Some(Feedback::Incorrect));

        assert_eq!(quiz.check_answer(question.correct, now), AnswerOutcome::Correct);
        assert_eq!(quiz.score(), before + 1);

        now += Duration::from_secs(2);
        quiz.tick(now, &mut clock, &mut rng);
    }

    assert_eq!(quiz.score(), CELEBRATION_THRESHOLD);
    assert!(seen.len() > 1);
    assert_eq!(quiz.check_answer(ClockTime { hour: 1, minute: 0 }, now), AnswerOutcome::Ignored);

    quiz.reset_game(&mut clock, &mut rng);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.phase(), QuizPhase::Asking);
    assert_eq!(clock.time(), quiz.question().unwrap().correct);
}

#[test]
fn leaving_quiz_mid_delay_is_harmless() {
    let mut clock = Clock::default();
    let mut quiz = Quiz::new(Pacing {
        advance_delay: Duration::from_millis(50),
        celebration_delay: Duration::from_millis(50),
    });
    let mut rng = SmallRng::seed_from_u64(11);
    let now = Instant::now();

    quiz.toggle_mode(&mut clock, &mut rng);
    let correct = quiz.question().unwrap().correct;
    quiz.check_answer(correct, now);
    assert!(quiz.has_pending_transition());

    quiz.toggle_mode(&mut clock, &mut rng);
    assert!(!quiz.has_pending_transition());
    let shown = clock.time();
    quiz.tick(now + Duration::from_secs(1), &mut clock, &mut rng);
    assert!(!quiz.is_active());
    assert_eq!(clock.time(), shown);
}

#[test]
fn dragging_around_a_terminal_face() {
    let face = FaceGeometry::new(Rect::new(10, 5, 40, 20), 2.0);
    let (cx, cy) = (30u16, 15u16);
    let mut clock = Clock::new(ClockTime { hour: 6, minute: 0 });

    // Walk the pointer round the rim: top, right, bottom, left, top.
    let path = [(cx, 5), (49, cy), (cx, 24), (10, cy), (cx, 5)];
    clock.begin_drag(face.angle_at(path[0].0, path[0].1));
    for (column, row) in &path[1..] {
        assert!(clock.drag_to(face.angle_at(*column, *row)));
    }
    clock.end_drag();

    assert_eq!(clock.time(), ClockTime { hour: 7, minute: 0 });
}
