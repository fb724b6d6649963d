//! Per-instance semantic state.

use sem_core::EnvId;

/// The value a [`Semantic`][crate::Semantic] exposes to downstream consumers
/// such as reward terms.  Always one entry per simulation instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SemanticState {
    /// Boolean predicate per instance (e.g. "object attached").
    Flags(Vec<bool>),
    /// Continuous quantity per instance.
    Scalars(Vec<f64>),
}

impl SemanticState {
    #[inline]
    pub fn as_flags(&self) -> Option<&[bool]> {
        match self {
            Self::Flags(v) => Some(v),
            Self::Scalars(_) => None,
        }
    }

    #[inline]
    pub fn as_scalars(&self) -> Option<&[f64]> {
        match self {
            Self::Scalars(v) => Some(v),
            Self::Flags(_) => None,
        }
    }

    /// Flag for one instance; `None` for scalar states or out-of-range ids.
    #[inline]
    pub fn flag(&self, env: EnvId) -> Option<bool> {
        self.as_flags().and_then(|v| v.get(env.index()).copied())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Flags(v) => v.len(),
            Self::Scalars(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `true` flags (0 for scalar states).
    pub fn count_set(&self) -> usize {
        self.as_flags().map_or(0, |v| v.iter().filter(|&&f| f).count())
    }
}
