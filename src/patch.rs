//! Partial-update payloads and SET clause compilation.

use crate::columns::{ColumnMap, quote_column};
use crate::error::{PatchError, PatchResult};
use crate::param::{Param, Params};
use tokio_postgres::types::ToSql;

/// A partial-update payload: logical fields and their new values, in
/// insertion order.
///
/// Fields are unique. Setting a field that is already present replaces its
/// value in place and keeps the field's original position, so the compiled
/// clause order is always first-insertion order.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Patch {
    fields: Vec<(String, Param)>,
}

impl Patch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set a field value.
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, field: &str, value: T) -> Self {
        self.put(field, Param::new(value));
        self
    }

    /// Set an optional field value (None => skip).
    pub fn set_opt<T: ToSql + Send + Sync + 'static>(self, field: &str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.set(field, v)
        } else {
            self
        }
    }

    /// Set a field to a JSON value.
    pub fn set_json<T: serde::Serialize>(self, field: &str, value: &T) -> serde_json::Result<Self> {
        let json_val = serde_json::to_value(value)?;
        Ok(self.set(field, json_val))
    }

    /// Build a patch from a decoded JSON object, preserving key order.
    ///
    /// Each value is bound as a `jsonb`-compatible [`serde_json::Value`]
    /// parameter. Key order follows the map's iteration order; this crate
    /// enables serde_json's `preserve_order` feature so objects decoded from
    /// request bodies keep their document order.
    pub fn from_json(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut patch = Self::new();
        for (field, value) in object {
            patch.put(field, Param::new(value.clone()));
        }
        patch
    }

    fn put(&mut self, field: &str, param: Param) {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, slot)) => *slot = param,
            None => self.fields.push((field.to_string(), param)),
        }
    }

    /// Get the number of fields in the patch.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the patch has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Compile the patch into a SET clause and its parameter values.
    ///
    /// Placeholders are numbered `$1..$len`. Fails with
    /// [`PatchError::BadRequest`] if the patch is empty.
    pub fn compile(&self, columns: &ColumnMap) -> PatchResult<CompiledSet> {
        self.compile_with_offset(columns, 0)
    }

    /// Compile with placeholders starting at `$offset+1`.
    ///
    /// Use this when the SET fragment lands after earlier parameters in the
    /// final statement. With an offset of 0, any parameters the caller
    /// appends after the values (WHERE, RETURNING) must be numbered from
    /// `$len+1`.
    pub fn compile_with_offset(
        &self,
        columns: &ColumnMap,
        offset: usize,
    ) -> PatchResult<CompiledSet> {
        if self.fields.is_empty() {
            return Err(PatchError::bad_request("no data to update"));
        }

        let mut values = Params::new();
        let mut set_parts = Vec::with_capacity(self.fields.len());
        for (field, param) in &self.fields {
            let idx = values.push(param.clone()) + offset;
            set_parts.push(format!("{}=${}", quote_column(columns.resolve(field)), idx));
        }

        let set_clause = set_parts.join(", ");

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "pgpatch.sql",
            param_count = values.len(),
            offset,
            set_clause = %set_clause,
        );

        Ok(CompiledSet { set_clause, values })
    }
}

/// A compiled SET clause with its positionally aligned parameter values.
///
/// The i-th value is bound by the placeholder `$(offset+i+1)` in the clause.
#[derive(Clone, Debug)]
pub struct CompiledSet {
    set_clause: String,
    values: Params,
}

impl CompiledSet {
    /// The comma-joined `"column"=$n` fragments.
    pub fn set_clause(&self) -> &str {
        &self.set_clause
    }

    /// The parameter values, in placeholder order.
    pub fn values(&self) -> &Params {
        &self.values
    }

    /// Get the number of compiled fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the clause has no fields (never true for a compiled patch).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as references for tokio-postgres execution.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.as_refs()
    }
}
