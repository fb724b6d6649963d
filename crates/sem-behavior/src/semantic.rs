//! The `Semantic` trait — the main extension point for user code.

use sem_core::{EnvId, SemanticResult};

use crate::SemanticState;

/// A semantic behavior attached to a simulated object.
///
/// Implementations reference (never own) the environment they observe and
/// keep one state entry per simulation instance.
///
/// # Required methods
///
/// Only [`state`][Self::state] is required.  The lifecycle hooks have no-op
/// defaults so purely observational behaviors override only what they need.
///
/// # Errors
///
/// Every hook returns [`SemanticResult`].  The host dispatches fail-fast: an
/// error from one behavior aborts the remaining behaviors for that call and
/// propagates to the simulation loop unchanged.
///
/// # Example
///
/// ```rust,ignore
/// struct StepCounter { state: Option<SemanticState> }
///
/// impl Semantic for StepCounter {
///     fn update(&mut self) -> SemanticResult<()> {
///         match &mut self.state {
///             Some(SemanticState::Scalars(v)) => v.iter_mut().for_each(|x| *x += 1.0),
///             _ => self.state = Some(SemanticState::Scalars(vec![1.0; 4])),
///         }
///         Ok(())
///     }
///
///     fn state(&self) -> Option<&SemanticState> {
///         self.state.as_ref()
///     }
/// }
/// ```
pub trait Semantic {
    /// Short human-readable name used in log output.
    fn name(&self) -> &str {
        "semantic"
    }

    /// Called once after the host object has been initialized.
    fn init(&mut self) -> SemanticResult<()> {
        Ok(())
    }

    /// Called when the listed instances restart.
    ///
    /// Must only touch the rows named in `env_ids`; every other instance keeps
    /// its state.
    fn reset(&mut self, _env_ids: &[EnvId]) -> SemanticResult<()> {
        Ok(())
    }

    /// Called once per physics step, after the host refreshed its buffers.
    ///
    /// Receives no time step: behaviors derive their state from the current
    /// simulated poses only.
    fn update(&mut self) -> SemanticResult<()> {
        Ok(())
    }

    /// The current per-instance state, or `None` before the first `update`.
    fn state(&self) -> Option<&SemanticState>;
}
