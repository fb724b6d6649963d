//! Sticky-grab configuration record.

use sem_core::{SemanticError, SemanticResult};

/// Immutable options for one [`StickyGrab`][crate::StickyGrab].
///
/// Names are resolved against the environment on every update, so a typo
/// surfaces as `InvalidReference` on the first step rather than here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StickyGrabCfg {
    /// Name of the robot whose end-effector holds the magnet.
    pub robot: String,

    /// Name of the object that gets attached.
    pub obj: String,

    /// Attach distance in metres.  Strict: a distance equal to the threshold
    /// does not attach.
    pub threshold: f64,
}

impl Default for StickyGrabCfg {
    fn default() -> Self {
        Self {
            robot:     "robot".into(),
            obj:       "object".into(),
            threshold: 0.1,
        }
    }
}

impl StickyGrabCfg {
    pub fn new(robot: impl Into<String>, obj: impl Into<String>, threshold: f64) -> Self {
        Self { robot: robot.into(), obj: obj.into(), threshold }
    }

    /// Reject thresholds that are non-finite or not strictly positive.
    pub fn validate(&self) -> SemanticResult<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(SemanticError::InvalidConfig(format!(
                "sticky grab threshold must be a positive distance, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
