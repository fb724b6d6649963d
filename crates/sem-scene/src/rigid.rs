//! A free rigid body replicated across simulation instances.

use nalgebra::Vector3;
use sem_core::{EnvId, RigidBodyView, RootState, SemanticError, SemanticResult, SimObject};
use tracing::trace;

use crate::{check_dt, check_prim_path};

/// Batched state of one rigid object.
///
/// `root_state` and `default_root_state` are always `num_envs` long.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RigidObject {
    /// Current world-frame root state, indexed by `EnvId`.
    pub root_state: Vec<RootState>,

    /// State restored by [`reset_to_default`][Self::reset_to_default].
    pub default_root_state: Vec<RootState>,

    prim_path: Option<String>,
    elapsed:   f64,
    writes:    usize,
}

impl RigidObject {
    /// `num_envs` copies of a body at rest at the origin.
    pub fn new(num_envs: usize) -> Self {
        Self::from_states(vec![RootState::default(); num_envs])
    }

    /// `num_envs` copies of a body at rest at `position`.
    pub fn at_position(num_envs: usize, position: Vector3<f64>) -> Self {
        Self::from_states(vec![RootState::at_rest(position); num_envs])
    }

    /// Build from explicit per-instance states; they also become the default.
    pub fn from_states(states: Vec<RootState>) -> Self {
        Self {
            default_root_state: states.clone(),
            root_state:         states,
            prim_path:          None,
            elapsed:            0.0,
            writes:             0,
        }
    }

    /// Move one instance without touching its orientation or velocity.
    pub fn set_position(&mut self, env: EnvId, position: Vector3<f64>) -> SemanticResult<()> {
        let num_envs = self.root_state.len();
        let row = self
            .root_state
            .get_mut(env.index())
            .ok_or(SemanticError::EnvIndexOutOfRange { index: env, num_envs })?;
        row.position = position;
        Ok(())
    }

    /// Restore the listed instances to their default root state.
    pub fn reset_to_default(&mut self, env_ids: &[EnvId]) -> SemanticResult<()> {
        sem_core::validate_env_ids(env_ids, self.root_state.len())?;
        for id in env_ids {
            self.root_state[id.index()] = self.default_root_state[id.index()];
        }
        Ok(())
    }

    /// Scene path recorded by `initialize`, if it has been called.
    pub fn prim_path(&self) -> Option<&str> {
        self.prim_path.as_deref()
    }

    /// Total simulated time seen by `update_buffers`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of full-batch root-state writes received.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SimObject for RigidObject {
    fn initialize(&mut self, prim_path: &str) -> SemanticResult<()> {
        check_prim_path(prim_path)?;
        self.prim_path = Some(prim_path.to_owned());
        Ok(())
    }

    fn update_buffers(&mut self, dt: f64) -> SemanticResult<()> {
        check_dt(dt)?;
        self.elapsed += dt;
        Ok(())
    }

    fn num_envs(&self) -> usize {
        self.root_state.len()
    }
}

impl RigidBodyView for RigidObject {
    fn root_state_w(&self) -> &[RootState] {
        &self.root_state
    }

    fn set_root_state(&mut self, states: &[RootState]) -> SemanticResult<()> {
        SemanticError::check_shape("object root state write", self.root_state.len(), states.len())?;
        self.root_state.copy_from_slice(states);
        self.writes += 1;
        trace!(rows = states.len(), "rigid object root state written");
        Ok(())
    }
}
