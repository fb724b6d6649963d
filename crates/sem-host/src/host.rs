//! The `SemanticHost` wrapper and its aggregate operations.

use sem_behavior::Semantic;
use sem_core::{EnvId, Shared, SimObject, read_shared, validate_env_ids, write_shared};
use tracing::{debug, trace, warn};

use crate::{HostError, HostResult};

/// A simulated object together with the ordered list of semantic behaviors
/// attached to it.
///
/// The list is `None` until [`equip`][Self::equip] is called; every aggregate
/// operation on an unequipped host fails with [`HostError::NotEquipped`]
/// before anything is dispatched.  Behaviors are only ever appended; the list
/// permits duplicates and lives as long as the host.
pub struct SemanticHost<O: SimObject + ?Sized> {
    /// The simulator object this host wraps.  Shared so behaviors may also
    /// target it.
    object: Shared<O>,

    semantics: Option<Vec<Box<dyn Semantic>>>,
}

/// Wrap `object` and equip it in one step.
pub fn equip<O: SimObject + ?Sized>(object: Shared<O>) -> SemanticHost<O> {
    let mut host = SemanticHost::new(object);
    host.equip();
    host
}

impl<O: SimObject + ?Sized> SemanticHost<O> {
    /// Wrap `object` without equipping it.
    pub fn new(object: Shared<O>) -> Self {
        Self { object, semantics: None }
    }

    /// Install an empty behavior list.
    ///
    /// Equipping an already-equipped host replaces its list: any behaviors
    /// added before are dropped.
    pub fn equip(&mut self) {
        match self.semantics.replace(Vec::new()) {
            Some(old) if !old.is_empty() => {
                warn!(discarded = old.len(), "re-equipping host drops its attached semantics");
            }
            _ => debug!("host equipped"),
        }
    }

    pub fn is_equipped(&self) -> bool {
        self.semantics.is_some()
    }

    /// Append a behavior.  No deduplication.
    pub fn add(&mut self, semantic: impl Semantic + 'static) -> HostResult<()> {
        self.add_boxed(Box::new(semantic))
    }

    /// Append an already-boxed behavior.
    pub fn add_boxed(&mut self, semantic: Box<dyn Semantic>) -> HostResult<()> {
        let list = self.list_mut()?;
        debug!(semantic = semantic.name(), position = list.len(), "semantic attached");
        list.push(semantic);
        Ok(())
    }

    /// Initialize the object at `prim_path`, then `init` every behavior in
    /// insertion order.
    pub fn initialize(&mut self, prim_path: &str) -> HostResult<()> {
        self.list()?;
        write_shared(&self.object, "host object")?.initialize(prim_path)?;
        let list = self.list_mut()?;
        for semantic in list.iter_mut() {
            semantic.init()?;
        }
        debug!(prim_path, semantics = list.len(), "host initialized");
        Ok(())
    }

    /// `reset` every behavior, in insertion order, for the listed instances.
    ///
    /// # Errors
    ///
    /// `EnvIndexOutOfRange` (before any behavior runs) if an index does not
    /// address one of the object's instances.
    pub fn reset(&mut self, env_ids: &[EnvId]) -> HostResult<()> {
        self.list()?;
        let num_envs = read_shared(&self.object, "host object")?.num_envs();
        validate_env_ids(env_ids, num_envs)?;
        for semantic in self.list_mut()? {
            semantic.reset(env_ids)?;
        }
        trace!(instances = env_ids.len(), "host reset");
        Ok(())
    }

    /// Refresh the object's buffers for a `dt` step, then `update` every
    /// behavior in insertion order.
    pub fn update(&mut self, dt: f64) -> HostResult<()> {
        self.list()?;
        write_shared(&self.object, "host object")?.update_buffers(dt)?;
        for semantic in self.list_mut()? {
            semantic.update()?;
        }
        Ok(())
    }

    /// The attached behaviors in insertion order.
    pub fn semantics(&self) -> HostResult<&[Box<dyn Semantic>]> {
        self.list().map(Vec::as_slice)
    }

    /// The behavior at `index`, if the host is equipped and it exists.
    pub fn semantic(&self, index: usize) -> Option<&dyn Semantic> {
        self.semantics.as_ref()?.get(index).map(|s| &**s)
    }

    /// Number of attached behaviors (0 when unequipped).
    pub fn len(&self) -> usize {
        self.semantics.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn object(&self) -> &Shared<O> {
        &self.object
    }

    fn list(&self) -> HostResult<&Vec<Box<dyn Semantic>>> {
        self.semantics.as_ref().ok_or(HostError::NotEquipped)
    }

    fn list_mut(&mut self) -> HostResult<&mut Vec<Box<dyn Semantic>>> {
        self.semantics.as_mut().ok_or(HostError::NotEquipped)
    }
}
