use std::fmt;

/// The keyed collection an id was looked up in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Collection {
    Element,
    Entity,
    UiContainer,
    Scene,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Collection::Element => "UI element",
            Collection::Entity => "entity",
            Collection::UiContainer => "UI container",
            Collection::Scene => "scene",
        })
    }
}

/// Errors raised by keyed lookups and insertions.
///
/// Every variant carries the offending id so it can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("{kind} with id `{id}` not found")]
    NotFound { kind: Collection, id: String },

    #[error("{kind} with id `{id}` already exists")]
    DuplicateId { kind: Collection, id: String },

    #[error("{kind} with id `{id}` is not a {expected}")]
    TypeMismatch { kind: Collection, id: String, expected: &'static str },
}

impl SceneError {
    pub(crate) fn not_found(kind: Collection, id: &str) -> Self {
        SceneError::NotFound { kind, id: id.to_owned() }
    }

    pub(crate) fn duplicate(kind: Collection, id: &str) -> Self {
        SceneError::DuplicateId { kind, id: id.to_owned() }
    }

    pub(crate) fn type_mismatch<T>(kind: Collection, id: &str) -> Self {
        SceneError::TypeMismatch { kind, id: id.to_owned(), expected: short_type_name::<T>() }
    }

    /// The id that caused the error.
    pub fn id(&self) -> &str {
        match self {
            SceneError::NotFound { id, .. }
            | SceneError::DuplicateId { id, .. }
            | SceneError::TypeMismatch { id, .. } => id,
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, SceneError::NotFound { .. })
    }
}

/// `tableau_scene::widgets::label::Label` → `Label`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
