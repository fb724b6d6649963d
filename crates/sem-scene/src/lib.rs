//! `sem-scene` — in-memory kinematic scene for the semantic-state framework.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`rigid`]         | `RigidObject` — batched root states of a free body         |
//! | [`articulation`]  | `Articulation` — root, end-effector, and joint positions   |
//! | [`scene`]         | `Scene` — name → handle registries, implements `Environment` |
//!
//! Nothing here integrates dynamics: values change only when a caller (a test,
//! a demo, or a behavior's root-state write) sets them.  A binding to a real
//! simulator implements the `sem-core` traits directly and does not need this
//! crate.
//!
//! # Batch layout
//!
//! Every per-instance `Vec` has exactly `num_envs` rows; `EnvId` is the index
//! into all of them:
//!
//! ```ignore
//! let p = cube.root_state[env.index()].position;
//! ```

pub mod articulation;
pub mod rigid;
pub mod scene;

#[cfg(test)]
mod tests;

pub use articulation::Articulation;
pub use rigid::RigidObject;
pub use scene::Scene;

// ── Shared buffer hooks ───────────────────────────────────────────────────────

use sem_core::{SemanticError, SemanticResult};

/// Validation shared by the `SimObject::initialize` impls.
fn check_prim_path(prim_path: &str) -> SemanticResult<()> {
    if prim_path.trim().is_empty() {
        return Err(SemanticError::InvalidConfig("prim path must not be empty".into()));
    }
    Ok(())
}

/// Validation shared by the `SimObject::update_buffers` impls.
fn check_dt(dt: f64) -> SemanticResult<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SemanticError::InvalidConfig(format!(
            "time step must be finite and non-negative, got {dt}"
        )));
    }
    Ok(())
}
