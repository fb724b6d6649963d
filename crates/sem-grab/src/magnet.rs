//! Magnet activation strategies.

use sem_core::{RobotView, SemanticError, SemanticResult};

/// Decides, per instance, whether the robot's magnet is switched on.
///
/// Any `Fn(&dyn RobotView) -> SemanticResult<Vec<bool>>` is a predicate, so a
/// one-off rule needs no named type:
///
/// ```ignore
/// let ee_above_table = |robot: &dyn RobotView| {
///     Ok(robot.ee_state_w().iter().map(|s| s.position.z > 0.02).collect())
/// };
/// let grab = StickyGrab::with_magnet(env, cfg, ee_above_table)?;
/// ```
pub trait MagnetPredicate {
    /// One flag per instance; the result must have one entry per row of
    /// `robot.ee_state_w()`.
    fn active(&self, robot: &dyn RobotView) -> SemanticResult<Vec<bool>>;
}

impl<F> MagnetPredicate for F
where
    F: Fn(&dyn RobotView) -> SemanticResult<Vec<bool>>,
{
    fn active(&self, robot: &dyn RobotView) -> SemanticResult<Vec<bool>> {
        self(robot)
    }
}

/// The magnet is always on.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysActive;

impl MagnetPredicate for AlwaysActive {
    fn active(&self, robot: &dyn RobotView) -> SemanticResult<Vec<bool>> {
        Ok(vec![true; robot.ee_state_w().len()])
    }
}

/// The magnet is on while a parallel gripper is closed.
///
/// The fingers are the last two joints; the gripper counts as closed when
/// their positions sum to strictly less than `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GripperClosure {
    pub threshold: f64,
}

impl GripperClosure {
    /// Finger-sum below which an OT-2 style parallel gripper is closed.
    pub const DEFAULT_THRESHOLD: f64 = 0.07;
}

impl Default for GripperClosure {
    fn default() -> Self {
        Self { threshold: Self::DEFAULT_THRESHOLD }
    }
}

impl MagnetPredicate for GripperClosure {
    fn active(&self, robot: &dyn RobotView) -> SemanticResult<Vec<bool>> {
        robot
            .dof_pos()
            .iter()
            .map(|row| match row.as_slice() {
                [.., left, right] => Ok(left + right < self.threshold),
                _ => Err(SemanticError::ShapeMismatch {
                    what:     "gripper finger joints",
                    expected: 2,
                    got:      row.len(),
                }),
            })
            .collect()
    }
}
