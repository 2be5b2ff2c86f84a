//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_DT;

/// 2D position in world space (world units, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated (non-paused) ticks.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Rectangular world extent anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Squared distance to another position.
    pub fn distance_sq(&self, other: &Position) -> f64 {
        self.as_vec().distance_squared(other.as_vec())
    }

    /// Distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Unit vector pointing at `other`, or zero when both coincide.
    pub fn direction_to(&self, other: &Position) -> DVec2 {
        unit_or_zero(other.as_vec() - self.as_vec())
    }

    /// Point `distance` units away along `angle` (radians, 0 = +x).
    pub fn offset(&self, angle: f64, distance: f64) -> Position {
        (self.as_vec() + DVec2::from_angle(angle) * distance).into()
    }

    /// Advance by `velocity * dt` (forward Euler).
    pub fn integrate(&mut self, velocity: &Velocity, dt: f64) {
        self.x += velocity.x * dt;
        self.y += velocity.y * dt;
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` along `angle`.
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        (DVec2::from_angle(angle) * speed).into()
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        self.as_vec().length()
    }

    /// Heading in radians (0 = +x, counter-clockwise toward +y).
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl SimTime {
    /// Clamp a measured frame interval into a usable tick step.
    /// Negative and non-finite inputs become 0.
    pub fn clamp_step(dt: f64) -> f64 {
        if dt.is_finite() {
            dt.clamp(0.0, MAX_DT)
        } else {
            0.0
        }
    }

    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a position so that it sits at least `margin` inside every edge.
    pub fn clamp_inset(&self, pos: Position, margin: f64) -> Position {
        Position::new(
            pos.x.clamp(margin, (self.width - margin).max(margin)),
            pos.y.clamp(margin, (self.height - margin).max(margin)),
        )
    }

    /// Whether a point lies inside the world rectangle (edges inclusive).
    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= self.width && pos.y <= self.height
    }
}

/// Normalize a vector. Zero-length (or non-finite) input yields the zero
/// vector, so callers never see NaN.
pub fn unit_or_zero(v: DVec2) -> DVec2 {
    v.normalize_or_zero()
}

/// Strict circle overlap test: `distance² < (ra + rb)²`.
pub fn circles_overlap(a: &Position, ra: f64, b: &Position, rb: f64) -> bool {
    let reach = ra + rb;
    a.distance_sq(b) < reach * reach
}
