//! `sem-core` — foundational types for the semantic-state framework.
//!
//! This crate is a dependency of every other `sem-*` crate.  It intentionally
//! has no `sem-*` dependencies and minimal external ones (only `nalgebra` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`ids`]     | `EnvId`, `validate_env_ids`                                   |
//! | [`state`]   | `RootState` — position, orientation, linear/angular velocity  |
//! | [`env`]     | `SimObject`, `RigidBodyView`, `RobotView`, `Environment`      |
//! | [`error`]   | `SemanticError`, `SemanticResult`                             |
//!
//! # The simulator boundary
//!
//! The physics engine owns every transform.  The traits in [`env`] are the
//! whole surface this framework reads from and writes to; a real simulator
//! binding implements them, and `sem-scene` provides an in-memory version for
//! tests and demos.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod env;
pub mod error;
pub mod ids;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use env::{Environment, RigidBodyView, RobotView, Shared, SimObject, read_shared, shared, write_shared};
pub use error::{SemanticError, SemanticResult};
pub use ids::{EnvId, validate_env_ids};
pub use state::RootState;
