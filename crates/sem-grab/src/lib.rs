//! `sem-grab` — sticky-grab semantic behavior.
//!
//! A sticky grab "magnetically" attaches an object to a robot's end-effector:
//! whenever the end-effector is within `threshold` of the object and the
//! magnet is active, the object's root state is overwritten each step so it
//! follows the tool.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`config`] | `StickyGrabCfg` — robot/object names and distance threshold    |
//! | [`magnet`] | `MagnetPredicate`, `AlwaysActive`, `GripperClosure`            |
//! | [`sticky`] | `StickyGrab` — the [`Semantic`][sem_behavior::Semantic] impl    |
//!
//! # Per-step rule
//!
//! For every instance, independently:
//!
//! ```text
//! attached = |ee.position - obj.position| < threshold  &&  magnet_active
//! if attached: obj ← (ee.position, obj.orientation, ee.linear_vel, ee.angular_vel)
//! ```
//!
//! There is no hysteresis: an end-effector hovering at the boundary may attach
//! and detach on alternate steps.

pub mod config;
pub mod magnet;
pub mod sticky;


pub use config::StickyGrabCfg;
pub use magnet::{AlwaysActive, GripperClosure, MagnetPredicate};
pub use sticky::StickyGrab;
