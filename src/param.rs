//! Parameter storage using Arc for clone-friendly patches.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly parameter wrapper using Arc.
///
/// This allows a [`Patch`](crate::Patch) to be cloned and compiled repeatedly
/// without copying parameter values.
#[derive(Clone)]
pub struct Param(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_sql(&self) -> &(dyn ToSql + Sync) {
        // Arc<dyn ToSql + Send + Sync> -> &(dyn ToSql + Sync)
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&"<dyn ToSql>").finish()
    }
}

/// The ordered parameter values of a compiled SET clause.
///
/// Value `i` is bound by the placeholder `$(i+1)` (plus the compile offset,
/// if one was given).
#[derive(Clone, Debug, Default)]
pub struct Params {
    values: Vec<Param>,
}

impl Params {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a parameter and return its 1-based placeholder index.
    pub fn push(&mut self, param: Param) -> usize {
        self.values.push(param);
        self.values.len()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the parameters in placeholder order.
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.values.iter()
    }

    /// Get all parameters as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(|p| p.as_sql()).collect()
    }
}
