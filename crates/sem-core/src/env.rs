//! The simulator collaborator interface.
//!
//! Nothing in this framework advances physics.  It reads batched state from
//! the simulator, occasionally overwrites an object's root state, and calls
//! two opaque per-object hooks (`initialize`, `update_buffers`).  These traits
//! are that surface and nothing more.
//!
//! # Sharing
//!
//! Behaviors *reference* the robots and objects of their environment; the
//! environment owns them.  Dispatch is single-threaded and synchronous, so
//! handles are [`Shared<T>`] (`Rc<RefCell<T>>`).  No borrow is held across a
//! lifecycle call, so the same object may be both a host and the target of
//! one of its own behaviors.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::{RootState, SemanticError, SemanticResult};

/// Single-threaded shared handle to a simulator-owned object.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap `value` in a fresh [`Shared`] handle.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Shared read access that reports a conflicting borrow as an error instead
/// of panicking.
pub fn read_shared<'a, T: ?Sized>(handle: &'a Shared<T>, what: &'static str) -> SemanticResult<Ref<'a, T>> {
    handle
        .try_borrow()
        .map_err(|_| SemanticError::Backend(format!("{what} is being written elsewhere")))
}

/// Exclusive access; see [`read_shared`].
pub fn write_shared<'a, T: ?Sized>(
    handle: &'a Shared<T>,
    what:   &'static str,
) -> SemanticResult<RefMut<'a, T>> {
    handle
        .try_borrow_mut()
        .map_err(|_| SemanticError::Backend(format!("{what} is already borrowed")))
}

/// Lifecycle hooks every host object exposes to the framework.
pub trait SimObject {
    /// Bind the object to its scene path.  Called once, before any behavior's
    /// `init`.
    fn initialize(&mut self, prim_path: &str) -> SemanticResult<()>;

    /// Refresh cached pose/velocity buffers after the simulator stepped `dt`
    /// seconds.
    fn update_buffers(&mut self, dt: f64) -> SemanticResult<()>;

    /// Number of parallel simulation instances the object spans.
    fn num_envs(&self) -> usize;
}

/// Read/write access to a body's world-frame root state.
pub trait RigidBodyView {
    /// Current root state, one row per instance.
    fn root_state_w(&self) -> &[RootState];

    /// Overwrite the full batch of root states.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `states.len()` differs from the batch size.
    fn set_root_state(&mut self, states: &[RootState]) -> SemanticResult<()>;
}

/// Read access to a robot's end-effector and joint state.
pub trait RobotView {
    /// World-frame end-effector state, one row per instance.
    fn ee_state_w(&self) -> &[RootState];

    /// Joint positions, one row (of length `num_dof`) per instance.
    fn dof_pos(&self) -> &[Vec<f64>];
}

/// Name-based lookup of the robots and objects in a scene.
///
/// Returning `None` is how an unresolvable configured name surfaces; callers
/// turn it into [`SemanticError::InvalidReference`][crate::SemanticError].
pub trait Environment {
    fn num_envs(&self) -> usize;

    fn robot(&self, name: &str) -> Option<Shared<dyn RobotView>>;

    fn object(&self, name: &str) -> Option<Shared<dyn RigidBodyView>>;
}
