//! Per-instance root state of a rigid body or end-effector.
//!
//! A `RootState` is one row of the simulator's `[num_envs, 13]` world-frame
//! state buffer: position (3), orientation quaternion (4), linear velocity (3)
//! and angular velocity (3).  Batches are plain `Vec<RootState>` / `&[RootState]`
//! with one row per [`EnvId`][crate::EnvId].

use nalgebra::{UnitQuaternion, Vector3};

/// World-frame pose and velocity of one body in one simulation instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootState {
    pub position:         Vector3<f64>,
    pub orientation:      UnitQuaternion<f64>,
    pub linear_velocity:  Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
}

impl Default for RootState {
    fn default() -> Self {
        Self::at_rest(Vector3::zeros())
    }
}

impl RootState {
    /// A body at `position` with identity orientation and zero velocity.
    #[inline]
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self {
            position,
            orientation:      UnitQuaternion::identity(),
            linear_velocity:  Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }

    /// Euclidean distance between the two positions.
    #[inline]
    pub fn distance_to(&self, other: &RootState) -> f64 {
        (self.position - other.position).norm()
    }

    /// This row dragged along by `leader`: position and both velocities are
    /// taken from `leader`, orientation is kept.
    #[inline]
    pub fn follow(&self, leader: &RootState) -> Self {
        Self {
            position:         leader.position,
            orientation:      self.orientation,
            linear_velocity:  leader.linear_velocity,
            angular_velocity: leader.angular_velocity,
        }
    }

    /// `true` if every component is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.orientation.coords.iter().all(|v| v.is_finite())
            && self.linear_velocity.iter().all(|v| v.is_finite())
            && self.angular_velocity.iter().all(|v| v.is_finite())
    }
}
