//! magnet — smallest end-to-end demo of the semantic-state framework.
//!
//! Four simulation instances of a 9-joint arm with a parallel gripper hover
//! above a cube.  The tool descends, closes its fingers (except in instance 2)
//! and lifts again.  A gripper-magnet sticky grab attached to the cube makes
//! it follow the tool in every instance where the fingers closed within reach;
//! instance 3's cube sits out of range and never moves.
//!
//! Run with `RUST_LOG=debug` to see attach/detach transitions.

use std::rc::Rc;

use anyhow::Result;
use nalgebra::Vector3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sem_behavior::SemanticState;
use sem_core::{EnvId, Environment};
use sem_grab::{StickyGrab, StickyGrabCfg};
use sem_host::equip;
use sem_scene::{Articulation, RigidObject, Scene};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_ENVS:    usize = 4;
const NUM_DOF:     usize = 9;   // 7 arm joints + 2 fingers
const DT:          f64   = 1.0 / 60.0;
const STEPS:       u32   = 40;
const CLOSE_AT:    u32   = 15;  // step at which the fingers close
const LIFT_AT:     u32   = 20;  // step at which the tool starts rising
const OPEN_FINGER: f64   = 0.04;
const SHUT_FINGER: f64   = 0.01;

// Sticky-grab options as an environment config file would carry them.
const GRAB_CFG_JSON: &str = r#"{
    "robot": "arm",
    "obj": "cube",
    "threshold": 0.05
}"#;

// ── Scripted tool motion ──────────────────────────────────────────────────────

/// Tool height at `step`: descend from 0.3 m to the cube, pause, then lift.
fn tool_height(step: u32) -> f64 {
    const TOP: f64 = 0.3;
    const CUBE: f64 = 0.02;
    if step < CLOSE_AT {
        TOP - (TOP - CUBE) * f64::from(step) / f64::from(CLOSE_AT - 1)
    } else if step < LIFT_AT {
        CUBE
    } else {
        CUBE + 0.01 * f64::from(step - LIFT_AT)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg: StickyGrabCfg = serde_json::from_str(GRAB_CFG_JSON)?;
    info!(?cfg, "loaded sticky grab config");

    // ── Scene ─────────────────────────────────────────────────────────────
    let mut scene = Scene::new(NUM_ENVS);
    let arm = scene.add_robot("arm", Articulation::new(NUM_ENVS, NUM_DOF))?;
    let cube = scene.add_object("cube", RigidObject::at_position(NUM_ENVS, Vector3::new(0.0, 0.0, 0.02)))?;
    cube.borrow_mut().set_position(EnvId(3), Vector3::new(0.5, 0.0, 0.02))?;
    let env: Rc<dyn Environment> = Rc::new(scene);

    // ── Host ──────────────────────────────────────────────────────────────
    let mut host = equip(cube.clone());
    host.add(StickyGrab::gripper_magnet(env.clone(), cfg)?)?;
    host.initialize("/World/envs/env_.*/Cube")?;
    let all: Vec<EnvId> = EnvId::all(NUM_ENVS).collect();
    host.reset(&all)?;

    // ── Loop ──────────────────────────────────────────────────────────────
    for step in 0..STEPS {
        {
            let mut arm = arm.borrow_mut();
            for id in &all {
                arm.set_ee_position(*id, Vector3::new(0.0, 0.0, tool_height(step)))?;
                let finger = if step >= CLOSE_AT && *id != EnvId(2) { SHUT_FINGER } else { OPEN_FINGER };
                let mut joints = vec![0.0; NUM_DOF];
                joints[NUM_DOF - 2..].fill(finger);
                arm.set_joint_positions(*id, &joints)?;
            }
        }

        host.update(DT)?;

        let attached = host
            .semantic(0)
            .and_then(|s| s.state())
            .map_or(0, SemanticState::count_set);
        let heights: Vec<String> = cube
            .borrow()
            .root_state
            .iter()
            .map(|s| format!("{:.3}", s.position.z))
            .collect();
        info!(step, attached, cube_z = ?heights, "step");
    }

    host.reset(&[EnvId(0)])?;
    if let Some(state) = host.semantic(0).and_then(|s| s.state()) {
        info!(flags = ?state.as_flags(), "after resetting instance 0");
    }
    info!(sim_time = cube.borrow().elapsed(), "done");

    Ok(())
}
