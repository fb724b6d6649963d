//! Unit tests for sem-scene.

use nalgebra::Vector3;
use sem_core::{
    EnvId, Environment, RigidBodyView, RobotView, RootState, SemanticError, SimObject,
};

use crate::{Articulation, RigidObject, Scene};

// ── RigidObject ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod rigid_tests {
    use super::*;

    #[test]
    fn new_spans_num_envs() {
        let obj = RigidObject::new(4);
        assert_eq!(obj.num_envs(), 4);
        assert_eq!(obj.root_state_w().len(), 4);
        assert!(obj.prim_path().is_none());
    }

    #[test]
    fn initialize_records_path() {
        let mut obj = RigidObject::new(1);
        obj.initialize("/World/envs/env_.*/Cube").unwrap();
        assert_eq!(obj.prim_path(), Some("/World/envs/env_.*/Cube"));
    }

    #[test]
    fn initialize_rejects_blank_path() {
        let mut obj = RigidObject::new(1);
        assert!(matches!(obj.initialize("  "), Err(SemanticError::InvalidConfig(_))));
    }

    #[test]
    fn update_buffers_accumulates_dt() {
        let mut obj = RigidObject::new(1);
        obj.update_buffers(0.01).unwrap();
        obj.update_buffers(0.02).unwrap();
        assert!((obj.elapsed() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn update_buffers_rejects_bad_dt() {
        let mut obj = RigidObject::new(1);
        assert!(obj.update_buffers(-0.1).is_err());
        assert!(obj.update_buffers(f64::NAN).is_err());
        assert_eq!(obj.elapsed(), 0.0);
    }

    #[test]
    fn set_root_state_full_batch() {
        let mut obj = RigidObject::new(2);
        let rows = vec![
            RootState::at_rest(Vector3::new(1.0, 0.0, 0.0)),
            RootState::at_rest(Vector3::new(2.0, 0.0, 0.0)),
        ];
        obj.set_root_state(&rows).unwrap();
        assert_eq!(obj.root_state, rows);
        assert_eq!(obj.write_count(), 1);
    }

    #[test]
    fn set_root_state_wrong_length_is_shape_mismatch() {
        let mut obj = RigidObject::new(3);
        let err = obj.set_root_state(&[RootState::default()]).unwrap_err();
        assert!(matches!(err, SemanticError::ShapeMismatch { expected: 3, got: 1, .. }));
        assert_eq!(obj.write_count(), 0);
    }

    #[test]
    fn set_position_out_of_range() {
        let mut obj = RigidObject::new(2);
        assert!(obj.set_position(EnvId(2), Vector3::zeros()).is_err());
    }

    #[test]
    fn reset_to_default_restores_listed_rows_only() {
        let mut obj = RigidObject::at_position(3, Vector3::new(0.0, 0.0, 0.5));
        for env in EnvId::all(3) {
            obj.set_position(env, Vector3::new(9.0, 9.0, 9.0)).unwrap();
        }
        obj.reset_to_default(&[EnvId(0), EnvId(2)]).unwrap();
        assert_eq!(obj.root_state[0].position, Vector3::new(0.0, 0.0, 0.5));
        assert_eq!(obj.root_state[1].position, Vector3::new(9.0, 9.0, 9.0));
        assert_eq!(obj.root_state[2].position, Vector3::new(0.0, 0.0, 0.5));
    }
}

// ── Articulation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod articulation_tests {
    use super::*;

    #[test]
    fn shape_matches_construction() {
        let robot = Articulation::new(3, 9);
        assert_eq!(robot.num_envs(), 3);
        assert_eq!(robot.num_dof(), 9);
        assert_eq!(robot.dof_pos().len(), 3);
        assert!(robot.dof_pos().iter().all(|row| row.len() == 9));
        assert_eq!(robot.ee_state_w().len(), 3);
    }

    #[test]
    fn set_joint_positions_checks_width() {
        let mut robot = Articulation::new(2, 2);
        robot.set_joint_positions(EnvId(1), &[0.04, 0.04]).unwrap();
        assert_eq!(robot.dof_pos()[1], vec![0.04, 0.04]);
        assert_eq!(robot.dof_pos()[0], vec![0.0, 0.0]);
        assert!(matches!(
            robot.set_joint_positions(EnvId(0), &[0.1]),
            Err(SemanticError::ShapeMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn set_ee_position_one_row() {
        let mut robot = Articulation::new(2, 0);
        robot.set_ee_position(EnvId(0), Vector3::new(0.1, 0.2, 0.3)).unwrap();
        assert_eq!(robot.ee_state_w()[0].position, Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(robot.ee_state_w()[1].position, Vector3::zeros());
        assert!(robot.set_ee_position(EnvId(5), Vector3::zeros()).is_err());
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scene_tests {
    use super::*;

    #[test]
    fn lookups_share_the_registered_object() {
        let mut scene = Scene::new(2);
        let cube = scene.add_object("cube", RigidObject::new(2)).unwrap();
        cube.borrow_mut().set_position(EnvId(1), Vector3::new(0.0, 0.0, 1.0)).unwrap();

        let view = scene.object("cube").unwrap();
        assert_eq!(view.borrow().root_state_w()[1].position, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(scene.num_envs(), 2);
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let scene = Scene::new(1);
        assert!(scene.robot("franka").is_none());
        assert!(scene.object("cube").is_none());
        assert!(scene.robot_handle("franka").is_none());
    }

    #[test]
    fn robots_and_objects_are_separate_namespaces() {
        let mut scene = Scene::new(1);
        scene.add_robot("arm", Articulation::new(1, 2)).unwrap();
        assert!(scene.robot("arm").is_some());
        assert!(scene.object("arm").is_none());
    }

    #[test]
    fn batch_mismatch_rejected() {
        let mut scene = Scene::new(4);
        assert!(matches!(
            scene.add_object("cube", RigidObject::new(2)),
            Err(SemanticError::ShapeMismatch { expected: 4, got: 2, .. })
        ));
        assert!(scene.add_robot("arm", Articulation::new(3, 2)).is_err());
        assert!(scene.object_handle("cube").is_none());
    }
}
