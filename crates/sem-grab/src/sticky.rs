//! The sticky-grab behavior.

use std::rc::Rc;

use sem_behavior::{Semantic, SemanticState};
use sem_core::{
    EnvId, Environment, RigidBodyView, RobotView, SemanticError, SemanticResult, Shared,
    read_shared, validate_env_ids, write_shared,
};
use tracing::{debug, trace};

use crate::{AlwaysActive, GripperClosure, MagnetPredicate, StickyGrabCfg};

/// Attaches `cfg.obj` to the end-effector of `cfg.robot` while it is within
/// `cfg.threshold` and the magnet predicate holds.
///
/// State is a [`SemanticState::Flags`] vector, one "attached" flag per
/// instance, `None` until the first [`update`][Semantic::update].
pub struct StickyGrab {
    env:    Rc<dyn Environment>,
    cfg:    StickyGrabCfg,
    magnet: Box<dyn MagnetPredicate>,
    label:  String,
    state:  Option<SemanticState>,
}

impl StickyGrab {
    /// Sticky grab whose magnet is always on.
    pub fn new(env: Rc<dyn Environment>, cfg: StickyGrabCfg) -> SemanticResult<Self> {
        Self::with_magnet(env, cfg, AlwaysActive)
    }

    /// Sticky grab for a parallel-gripper tool: the magnet is on only while
    /// the fingers are closed (see [`GripperClosure`]).
    pub fn gripper_magnet(env: Rc<dyn Environment>, cfg: StickyGrabCfg) -> SemanticResult<Self> {
        Self::with_magnet(env, cfg, GripperClosure::default())
    }

    /// Sticky grab with a caller-supplied activation rule.
    pub fn with_magnet(
        env:    Rc<dyn Environment>,
        cfg:    StickyGrabCfg,
        magnet: impl MagnetPredicate + 'static,
    ) -> SemanticResult<Self> {
        cfg.validate()?;
        let label = format!("sticky_grab({} -> {})", cfg.robot, cfg.obj);
        Ok(Self {
            env,
            cfg,
            magnet: Box::new(magnet),
            label,
            state: None,
        })
    }

    pub fn config(&self) -> &StickyGrabCfg {
        &self.cfg
    }

    /// Per-instance attach flags, `None` before the first update.
    pub fn attached(&self) -> Option<&[bool]> {
        self.state.as_ref().and_then(SemanticState::as_flags)
    }

    fn resolve(&self) -> SemanticResult<(Shared<dyn RobotView>, Shared<dyn RigidBodyView>)> {
        let robot = self.env.robot(&self.cfg.robot).ok_or_else(|| {
            SemanticError::InvalidReference { kind: "robot", name: self.cfg.robot.clone() }
        })?;
        let object = self.env.object(&self.cfg.obj).ok_or_else(|| {
            SemanticError::InvalidReference { kind: "object", name: self.cfg.obj.clone() }
        })?;
        Ok((robot, object))
    }

    fn log_transitions(&self, attached: &[bool]) {
        let Some(previous) = self.attached() else { return };
        if previous.len() != attached.len() {
            return;
        }
        for (env, (&was, &now)) in EnvId::all(attached.len()).zip(previous.iter().zip(attached)) {
            if was != now {
                debug!(grab = %self.label, %env, attached = now, "sticky grab transition");
            }
        }
    }
}

impl Semantic for StickyGrab {
    fn name(&self) -> &str {
        &self.label
    }

    /// Force the listed instances to detached without re-evaluating distance.
    ///
    /// Before the first update there is no state to clear and this is a no-op.
    fn reset(&mut self, env_ids: &[EnvId]) -> SemanticResult<()> {
        let Some(SemanticState::Flags(flags)) = &mut self.state else {
            return Ok(());
        };
        validate_env_ids(env_ids, flags.len())?;
        for id in env_ids {
            flags[id.index()] = false;
        }
        Ok(())
    }

    fn update(&mut self) -> SemanticResult<()> {
        let (robot, object) = self.resolve()?;

        let (rows, attached) = {
            let robot = read_shared(&robot, "robot")?;
            let ee = robot.ee_state_w();
            let mut rows = read_shared(&object, "object")?.root_state_w().to_vec();
            SemanticError::check_shape("end-effector state", rows.len(), ee.len())?;

            let active = self.magnet.active(&*robot)?;
            SemanticError::check_shape("magnet activation", rows.len(), active.len())?;

            let threshold = self.cfg.threshold;
            let attached: Vec<bool> = ee
                .iter()
                .zip(&rows)
                .zip(&active)
                .map(|((ee, obj), &on)| ee.distance_to(obj) < threshold && on)
                .collect();
            trace!(grab = %self.label, ?attached, ?active, "sticky grab evaluated");

            // Detached rows are written back unchanged.
            for ((row, ee), &hold) in rows.iter_mut().zip(ee).zip(&attached) {
                if hold {
                    *row = row.follow(ee);
                }
            }
            (rows, attached)
        };

        write_shared(&object, "object")?.set_root_state(&rows)?;

        self.log_transitions(&attached);
        self.state = Some(SemanticState::Flags(attached));
        Ok(())
    }

    fn state(&self) -> Option<&SemanticState> {
        self.state.as_ref()
    }
}
