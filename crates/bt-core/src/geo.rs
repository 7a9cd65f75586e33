//! Positions in the agents' world space.
//!
//! The engine does not care about units; movement strategies only compare
//! distances reported by a mover against an arrival threshold.

/// A point in 3-D world space stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn distance_squared(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Move from `self` toward `target` by at most `max_step`, never
    /// overshooting.
    pub fn step_toward(self, target: Position, max_step: f32) -> Position {
        let dist = self.distance(target);
        if dist <= max_step || dist == 0.0 {
            return target;
        }
        let t = max_step / dist;
        Position {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
            z: self.z + (target.z - self.z) * t,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
