//! An articulated robot replicated across simulation instances.

use nalgebra::Vector3;
use sem_core::{
    EnvId, RigidBodyView, RobotView, RootState, SemanticError, SemanticResult, SimObject,
};

use crate::{check_dt, check_prim_path};

/// Batched state of one articulated robot.
///
/// `root_state`, `ee_state` and `dof_pos` each have `num_envs` rows; every
/// row of `dof_pos` has `num_dof` entries.  For a parallel gripper the two
/// finger joints are the last two entries.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Articulation {
    pub root_state: Vec<RootState>,

    /// World-frame end-effector (tool frame) state.
    pub ee_state: Vec<RootState>,

    pub dof_pos: Vec<Vec<f64>>,

    num_dof:   usize,
    prim_path: Option<String>,
    elapsed:   f64,
}

impl Articulation {
    /// A robot at the origin with all joints at zero.
    pub fn new(num_envs: usize, num_dof: usize) -> Self {
        Self {
            root_state: vec![RootState::default(); num_envs],
            ee_state:   vec![RootState::default(); num_envs],
            dof_pos:    vec![vec![0.0; num_dof]; num_envs],
            num_dof,
            prim_path:  None,
            elapsed:    0.0,
        }
    }

    pub fn num_dof(&self) -> usize {
        self.num_dof
    }

    /// Place the end-effector of one instance, leaving its velocity as is.
    pub fn set_ee_position(&mut self, env: EnvId, position: Vector3<f64>) -> SemanticResult<()> {
        self.ee_row(env)?.position = position;
        Ok(())
    }

    /// Replace the full end-effector state of one instance.
    pub fn set_ee_state(&mut self, env: EnvId, state: RootState) -> SemanticResult<()> {
        *self.ee_row(env)? = state;
        Ok(())
    }

    /// Set every joint position of one instance.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `positions.len() != num_dof`.
    pub fn set_joint_positions(&mut self, env: EnvId, positions: &[f64]) -> SemanticResult<()> {
        SemanticError::check_shape("joint positions", self.num_dof, positions.len())?;
        let num_envs = self.dof_pos.len();
        let row = self
            .dof_pos
            .get_mut(env.index())
            .ok_or(SemanticError::EnvIndexOutOfRange { index: env, num_envs })?;
        row.copy_from_slice(positions);
        Ok(())
    }

    pub fn prim_path(&self) -> Option<&str> {
        self.prim_path.as_deref()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    fn ee_row(&mut self, env: EnvId) -> SemanticResult<&mut RootState> {
        let num_envs = self.ee_state.len();
        self.ee_state
            .get_mut(env.index())
            .ok_or(SemanticError::EnvIndexOutOfRange { index: env, num_envs })
    }
}

impl SimObject for Articulation {
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

impl RigidBodyView for Articulation {
    fn root_state_w(&self) -> &[RootState] {
        &self.root_state
    }

    fn set_root_state(&mut self, states: &[RootState]) -> SemanticResult<()> {
        SemanticError::check_shape("robot root state write", self.root_state.len(), states.len())?;
        self.root_state.copy_from_slice(states);
        Ok(())
    }
}

impl RobotView for Articulation {
    fn ee_state_w(&self) -> &[RootState] {
        &self.ee_state
    }

    fn dof_pos(&self) -> &[Vec<f64>] {
        &self.dof_pos
    }
}
