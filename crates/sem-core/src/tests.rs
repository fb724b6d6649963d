//! Unit tests for sem-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EnvId, SemanticError, validate_env_ids};

    #[test]
    fn index_roundtrip() {
        let id = EnvId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EnvId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(EnvId::INVALID.0, u32::MAX);
        assert_eq!(EnvId::default(), EnvId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(EnvId(7).to_string(), "EnvId(7)");
    }

    #[test]
    fn all_is_ascending() {
        let ids: Vec<EnvId> = EnvId::all(3).collect();
        assert_eq!(ids, vec![EnvId(0), EnvId(1), EnvId(2)]);
    }

    #[test]
    fn validate_accepts_in_range_and_duplicates() {
        assert!(validate_env_ids(&[EnvId(0), EnvId(3), EnvId(3)], 4).is_ok());
        assert!(validate_env_ids(&[], 0).is_ok());
    }

    #[test]
    fn validate_rejects_first_out_of_range() {
        let err = validate_env_ids(&[EnvId(1), EnvId(4), EnvId(9)], 4).unwrap_err();
        match err {
            SemanticError::EnvIndexOutOfRange { index, num_envs } => {
                assert_eq!(index, EnvId(4));
                assert_eq!(num_envs, 4);
            }
            other => panic!("wrong variant: {other}"),
        }
    }
}

#[cfg(test)]
mod state {
    use nalgebra::{UnitQuaternion, Vector3};

    use crate::RootState;

    #[test]
    fn default_is_origin_at_rest() {
        let s = RootState::default();
        assert_eq!(s.position, Vector3::zeros());
        assert_eq!(s.orientation, UnitQuaternion::identity());
        assert_eq!(s.linear_velocity, Vector3::zeros());
    }

    #[test]
    fn distance_is_euclidean() {
        let a = RootState::at_rest(Vector3::new(0.0, 0.0, 0.0));
        let b = RootState::at_rest(Vector3::new(3.0, 4.0, 0.0));
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn follow_keeps_orientation() {
        let rot = UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3);
        let obj = RootState { orientation: rot, ..RootState::at_rest(Vector3::new(1.0, 1.0, 1.0)) };
        let ee = RootState {
            position:         Vector3::new(0.5, 0.0, 0.2),
            orientation:      UnitQuaternion::identity(),
            linear_velocity:  Vector3::new(0.0, 1.0, 0.0),
            angular_velocity: Vector3::new(0.0, 0.0, 2.0),
        };
        let moved = obj.follow(&ee);
        assert_eq!(moved.position, ee.position);
        assert_eq!(moved.linear_velocity, ee.linear_velocity);
        assert_eq!(moved.angular_velocity, ee.angular_velocity);
        assert_eq!(moved.orientation, rot);
    }

    #[test]
    fn non_finite_detected() {
        let mut s = RootState::default();
        assert!(s.is_finite());
        s.position.x = f64::NAN;
        assert!(!s.is_finite());
    }
}

#[cfg(test)]
mod error {
    use crate::{EnvId, SemanticError};

    #[test]
    fn messages_name_the_culprit() {
        let e = SemanticError::InvalidReference { kind: "robot", name: "franka".into() };
        assert_eq!(e.to_string(), "robot 'franka' not found in environment");

        let e = SemanticError::ShapeMismatch { what: "object root state", expected: 4, got: 2 };
        assert_eq!(e.to_string(), "object root state has length 2, expected 4");

        let e = SemanticError::EnvIndexOutOfRange { index: EnvId(5), num_envs: 2 };
        assert_eq!(e.to_string(), "EnvId(5) is out of range for 2 simulation instances");
    }
}
