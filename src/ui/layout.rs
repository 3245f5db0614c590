use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use crate::quiz::options::OPTION_COUNT;

const TOGGLE_WIDTH: u16 = 26;
const PANEL_HEIGHT: u16 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥70 cols: clock left, panel right
    Narrow, // <70 cols: clock above panel
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 70 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppLayout {
    pub area: Rect,
    pub header: Rect,
    pub mode_toggle: Rect,
    /// Bordered clock block; the drawable face is `face_inner`.
    pub face: Rect,
    pub face_inner: Rect,
    pub panel: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        let header_split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
            .split(vertical[0]);

        let main = match tier {
            LayoutTier::Wide => Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(vertical[1]),
            LayoutTier::Narrow => Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(8), Constraint::Length(PANEL_HEIGHT)])
                .split(vertical[1]),
        };

        Self {
            area,
            header: vertical[0],
            mode_toggle: header_split[1],
            face: main[0],
            face_inner: main[0].inner(Margin::new(1, 1)),
            panel: main[1],
            footer: vertical[2],
            tier,
        }
    }
}

/// Regions inside the quiz panel. Answer buttons form a 2x2 grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPanelLayout {
    pub question: Rect,
    pub options: Vec<Rect>,
    pub feedback: Rect,
    pub score: Rect,
}

impl QuizPanelLayout {
    pub fn new(panel: Rect) -> Self {
        let inner = panel.inner(Margin::new(1, 1));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let mut options = Vec::with_capacity(OPTION_COUNT);
        for row in [rows[1], rows[2]] {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row);
            options.extend(cols.iter().copied());
        }

        Self {
            question: rows[0],
            options,
            feedback: rows[3],
            score: rows[4],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CelebrationLayout {
    pub dialog: Rect,
    pub message: Rect,
    pub restart: Rect,
}

impl CelebrationLayout {
    pub fn new(area: Rect) -> Self {
        let dialog = centered_rect(50, 40, area);
        let inner = dialog.inner(Margin::new(1, 1));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(inner);
        let button_width = 24u16.min(rows[1].width);
        let restart = Rect::new(
            rows[1].x + (rows[1].width - button_width) / 2,
            rows[1].y,
            button_width,
            rows[1].height,
        );
        Self {
            dialog,
            message: rows[0],
            restart,
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 10;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
