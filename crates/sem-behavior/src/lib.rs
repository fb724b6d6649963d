//! `sem-behavior` — the semantic behavior lifecycle trait.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`semantic`] | `Semantic` trait (`init`, `reset`, `update`, `state`)          |
//! | [`state`]    | `SemanticState` — one entry per simulation instance            |
//! | [`noop`]     | `NoopSemantic` — base behavior that never produces state       |
//!
//! # Lifecycle
//!
//! A behavior is attached to a host (see `sem-host`) and driven by the
//! external simulation loop through the host:
//!
//! 1. **init**: once, after the host object itself was initialized.
//! 2. **reset(env_ids)**: whenever the listed instances restart an episode.
//! 3. **update**: once per physics step, after the host refreshed its
//!    buffers.  Recomputes the per-instance state and may write back to the
//!    simulator.
//!
//! State is `None` until the first `update`.

pub mod noop;
pub mod semantic;
pub mod state;

#[cfg(test)]
mod tests;

pub use noop::NoopSemantic;
pub use semantic::Semantic;
pub use state::SemanticState;
