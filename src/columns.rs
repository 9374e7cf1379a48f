//! Field-name translation and column quoting.
//!
//! [`ColumnMap`] maps application-level field names (e.g. `firstName`) to
//! their physical column names (e.g. `first_name`). Fields without an entry
//! keep their logical name as the column name.
//!
//! Lookup is a presence check, not a truthiness check: a field mapped to an
//! empty string translates to that empty string instead of falling back to
//! the logical name.

use std::collections::HashMap;

/// Translation table from logical field names to physical column names.
///
/// # Example
/// ```
/// use pgpatch::ColumnMap;
///
/// let columns = ColumnMap::new()
///     .map("firstName", "first_name")
///     .map("isAdmin", "is_admin");
///
/// assert_eq!(columns.resolve("firstName"), "first_name");
/// assert_eq!(columns.resolve("age"), "age");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ColumnMap {
    columns: HashMap<String, String>,
}

impl ColumnMap {
    /// Create an empty translation table (every field maps to itself).
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    /// Map a logical field name to a physical column name (chainable).
    pub fn map(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.columns.insert(field.into(), column.into());
        self
    }

    /// Insert a mapping.
    pub fn insert(&mut self, field: impl Into<String>, column: impl Into<String>) {
        self.columns.insert(field.into(), column.into());
    }

    /// Resolve a field to its physical column name.
    ///
    /// Fields absent from the table resolve to themselves.
    pub fn resolve<'a>(&'a self, field: &'a str) -> &'a str {
        match self.columns.get(field) {
            Some(column) => column.as_str(),
            None => field,
        }
    }

    /// Get the number of entries in the table.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<F, C> FromIterator<(F, C)> for ColumnMap
where
    F: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, C)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(f, c)| (f.into(), c.into()))
                .collect(),
        }
    }
}

impl<F, C> Extend<(F, C)> for ColumnMap
where
    F: Into<String>,
    C: Into<String>,
{
    fn extend<I: IntoIterator<Item = (F, C)>>(&mut self, iter: I) {
        self.columns
            .extend(iter.into_iter().map(|(f, c)| (f.into(), c.into())));
    }
}

/// Render a column name as a double-quoted SQL identifier.
///
/// Embedded `"` characters are escaped as `""`. No validation is performed;
/// malformed or reserved names are the caller's responsibility.
pub fn quote_column(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2); // surrounding quotes (escapes may add more)
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
            out.push('"');
        } else {
            out.push(ch);
        }
    }
    out.push('"');
    out
}
