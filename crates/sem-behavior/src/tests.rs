//! Unit tests for sem-behavior.

use sem_core::{EnvId, SemanticError, SemanticResult};

use crate::{NoopSemantic, Semantic, SemanticState};

// ── SemanticState ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn flags_accessors() {
        let s = SemanticState::Flags(vec![true, false, true]);
        assert_eq!(s.as_flags(), Some(&[true, false, true][..]));
        assert_eq!(s.as_scalars(), None);
        assert_eq!(s.flag(EnvId(1)), Some(false));
        assert_eq!(s.flag(EnvId(3)), None);
        assert_eq!(s.len(), 3);
        assert_eq!(s.count_set(), 2);
    }

    #[test]
    fn scalars_accessors() {
        let s = SemanticState::Scalars(vec![0.5]);
        assert_eq!(s.as_scalars(), Some(&[0.5][..]));
        assert_eq!(s.flag(EnvId(0)), None);
        assert_eq!(s.count_set(), 0);
        assert!(!s.is_empty());
    }

    #[test]
    fn empty_batch() {
        assert!(SemanticState::Flags(vec![]).is_empty());
    }
}

// ── NoopSemantic ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod noop_tests {
    use super::*;

    #[test]
    fn hooks_succeed_and_state_stays_none() {
        let mut noop = NoopSemantic;
        noop.init().unwrap();
        noop.reset(&[EnvId(0), EnvId(2)]).unwrap();
        noop.update().unwrap();
        assert!(noop.state().is_none());
        assert_eq!(noop.name(), "noop");
    }
}

// ── Custom Semantic ───────────────────────────────────────────────────────────

#[cfg(test)]
mod custom_semantic_tests {
    use super::*;

    /// Counts updates per instance; reset zeroes the listed rows.
    struct StepCounter {
        num_envs: usize,
        state:    Option<SemanticState>,
    }

    impl Semantic for StepCounter {
        fn reset(&mut self, env_ids: &[EnvId]) -> SemanticResult<()> {
            if let Some(SemanticState::Scalars(v)) = &mut self.state {
                for id in env_ids {
                    v[id.index()] = 0.0;
                }
            }
            Ok(())
        }

        fn update(&mut self) -> SemanticResult<()> {
            match &mut self.state {
                Some(SemanticState::Scalars(v)) => v.iter_mut().for_each(|x| *x += 1.0),
                _ => self.state = Some(SemanticState::Scalars(vec![1.0; self.num_envs])),
            }
            Ok(())
        }

        fn state(&self) -> Option<&SemanticState> {
            self.state.as_ref()
        }
    }

    #[test]
    fn state_undefined_until_first_update() {
        let mut c = StepCounter { num_envs: 3, state: None };
        c.init().unwrap();
        assert!(c.state().is_none());
        c.update().unwrap();
        assert_eq!(c.state().map(SemanticState::len), Some(3));
    }

    #[test]
    fn reset_touches_only_listed_rows() {
        let mut c = StepCounter { num_envs: 3, state: None };
        c.update().unwrap();
        c.update().unwrap();
        c.reset(&[EnvId(1)]).unwrap();
        assert_eq!(c.state().and_then(SemanticState::as_scalars), Some(&[2.0, 0.0, 2.0][..]));
    }

    #[test]
    fn default_name() {
        let c = StepCounter { num_envs: 1, state: None };
        assert_eq!(c.name(), "semantic");
    }

    #[test]
    fn semantic_is_object_safe_via_box() {
        let mut list: Vec<Box<dyn Semantic>> = vec![
            Box::new(NoopSemantic),
            Box::new(StepCounter { num_envs: 2, state: None }),
        ];
        for s in &mut list {
            s.update().unwrap();
        }
        assert!(list[0].state().is_none());
        assert!(list[1].state().is_some());
    }

    #[test]
    fn errors_propagate_from_hooks() {
        struct Broken;
        impl Semantic for Broken {
            fn update(&mut self) -> SemanticResult<()> {
                Err(SemanticError::Backend("physics view expired".into()))
            }
            fn state(&self) -> Option<&SemanticState> {
                None
            }
        }
        assert!(matches!(Broken.update(), Err(SemanticError::Backend(_))));
    }
}
