//! Name-based registry of the robots and objects in one batched scene.

use std::collections::HashMap;

use sem_core::{
    Environment, RigidBodyView, RobotView, SemanticError, SemanticResult, Shared, SimObject,
    shared,
};
use tracing::debug;

use crate::{Articulation, RigidObject};

/// Every robot and object of a scene, all spanning the same `num_envs`.
///
/// Registration hands back the concrete [`Shared`] handle so the caller can
/// keep driving poses; behaviors see the same object through the
/// [`Environment`] trait.
///
/// ```ignore
/// let mut scene = Scene::new(4);
/// let robot = scene.add_robot("robot", Articulation::new(4, 9))?;
/// let cube  = scene.add_object("cube", RigidObject::new(4))?;
/// let env: Rc<dyn Environment> = Rc::new(scene);
/// ```
pub struct Scene {
    num_envs: usize,
    robots:   HashMap<String, Shared<Articulation>>,
    objects:  HashMap<String, Shared<RigidObject>>,
}

impl Scene {
    pub fn new(num_envs: usize) -> Self {
        Self {
            num_envs,
            robots:  HashMap::new(),
            objects: HashMap::new(),
        }
    }

    /// Register `robot` under `name`, replacing any previous robot of that name.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the robot does not span `num_envs` instances.
    pub fn add_robot(
        &mut self,
        name:  impl Into<String>,
        robot: Articulation,
    ) -> SemanticResult<Shared<Articulation>> {
        SemanticError::check_shape("robot batch", self.num_envs, robot.num_envs())?;
        let name = name.into();
        let handle = shared(robot);
        debug!(%name, "robot registered");
        self.robots.insert(name, handle.clone());
        Ok(handle)
    }

    /// Register `object` under `name`, replacing any previous object of that name.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the object does not span `num_envs` instances.
    pub fn add_object(
        &mut self,
        name:   impl Into<String>,
        object: RigidObject,
    ) -> SemanticResult<Shared<RigidObject>> {
        SemanticError::check_shape("object batch", self.num_envs, object.num_envs())?;
        let name = name.into();
        let handle = shared(object);
        debug!(%name, "object registered");
        self.objects.insert(name, handle.clone());
        Ok(handle)
    }

    /// Concrete handle to a registered robot.
    pub fn robot_handle(&self, name: &str) -> Option<Shared<Articulation>> {
        self.robots.get(name).cloned()
    }

    /// Concrete handle to a registered object.
    pub fn object_handle(&self, name: &str) -> Option<Shared<RigidObject>> {
        self.objects.get(name).cloned()
    }
}

impl Environment for Scene {
    fn num_envs(&self) -> usize {
        self.num_envs
    }

    fn robot(&self, name: &str) -> Option<Shared<dyn RobotView>> {
        self.robots.get(name).map(|r| r.clone() as Shared<dyn RobotView>)
    }

    fn object(&self, name: &str) -> Option<Shared<dyn RigidBodyView>> {
        self.objects.get(name).map(|o| o.clone() as Shared<dyn RigidBodyView>)
    }
}
