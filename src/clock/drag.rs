use ratatui::layout::{Position, Rect};

pub const DEGREES_PER_MINUTE: f64 = 6.0;

/// Clockwise angle of a pointer offset from the face center, with 0° at
/// 12 o'clock. Screen y grows downward. Result is in `[0, 360)`.
pub fn pointer_angle(dx: f64, dy: f64) -> f64 {
    let angle = (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0);
    // A tiny negative input rounds up to exactly 360.
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Shortest signed step from `previous` to `current`, so one sample never
/// implies more than half a turn.
pub fn angle_delta(previous: f64, current: f64) -> f64 {
    let diff = current - previous;
    if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

/// Live drag state. Exists only between pointer-down and pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub last_angle: f64,
}

impl DragSession {
    pub fn start(angle: f64) -> Self {
        Self { last_angle: angle }
    }

    /// Record a new sample and return the minutes it moved the minute hand.
    pub fn advance(&mut self, angle: f64) -> f64 {
        let delta = angle_delta(self.last_angle, angle);
        self.last_angle = angle;
        delta / DEGREES_PER_MINUTE
    }
}

/// Where the face sits on screen, in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    pub area: Rect,
    /// Height of a cell divided by its width.
    pub cell_aspect: f64,
}

impl FaceGeometry {
    pub fn new(area: Rect, cell_aspect: f64) -> Self {
        Self { area, cell_aspect }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.area.x as f64 + self.area.width as f64 / 2.0,
            self.area.y as f64 + self.area.height as f64 / 2.0,
        )
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Angle of the cell under the pointer, measured at the cell's middle.
    pub fn angle_at(&self, column: u16, row: u16) -> f64 {
        let (cx, cy) = self.center();
        let dx = column as f64 + 0.5 - cx;
        let dy = (row as f64 + 0.5 - cy) * self.cell_aspect;
        pointer_angle(dx, dy)
    }
}
