//! A no-op semantic — never produces state.

use crate::{Semantic, SemanticState};

/// A [`Semantic`] whose hooks all do nothing and whose state stays `None`.
///
/// Useful as a placeholder in tests or to reserve a slot in a host's list.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSemantic;

impl Semantic for NoopSemantic {
    fn name(&self) -> &str {
        "noop"
    }

    fn state(&self) -> Option<&SemanticState> {
        None
    }
}
