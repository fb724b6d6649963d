//! `sem-host` — attaches semantic behaviors to simulated objects.
//!
//! # Lifecycle driven by the simulation loop
//!
//! ```text
//! host = equip(object)                 — empty behavior list
//! host.add(b1); host.add(b2)           — appended in order
//! host.initialize(path)                — object.initialize(path), then b1.init, b2.init
//! every episode restart:
//!   host.reset(env_ids)                — b1.reset(env_ids), b2.reset(env_ids)
//! every physics step:
//!   host.update(dt)                    — object.update_buffers(dt), then b1.update, b2.update
//! ```
//!
//! Dispatch is sequential and fail-fast: the first error aborts the remaining
//! behaviors for that call and is returned to the caller unchanged.  `dt` is
//! consumed by the object's buffer refresh only; behaviors are not given it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sem_grab::{StickyGrab, StickyGrabCfg};
//! use sem_host::equip;
//!
//! let mut host = equip(cube.clone());
//! host.add(StickyGrab::new(env.clone(), StickyGrabCfg::new("robot", "cube", 0.1))?)?;
//! host.initialize("/World/envs/env_.*/Cube")?;
//! host.reset(&all_envs)?;
//! loop {
//!     physics.step(dt);
//!     host.update(dt)?;
//! }
//! ```

pub mod error;
pub mod host;


pub use error::{HostError, HostResult};
pub use host::{SemanticHost, equip};
