//! # pgpatch
//!
//! Compile partial-update payloads into parameterized PostgreSQL SET clauses.
//!
//! ## Features
//!
//! - **Order-preserving**: the SET clause and its values follow the payload's
//!   field insertion order, positionally aligned with `$1, $2, ...`
//! - **Field-name translation**: map application-level field names to their
//!   physical column names, with untranslated fields passing through verbatim
//! - **Parameterized by construction**: values never touch the SQL string;
//!   they come back as `ToSql` parameters ready for tokio-postgres
//! - **Composable numbering**: compile with an offset, or append WHERE /
//!   RETURNING parameters numbered after the SET values
//!
//! ## Example
//!
//! ```
//! use pgpatch::{ColumnMap, Patch};
//!
//! let columns = ColumnMap::new().map("firstName", "first_name");
//!
//! let update = Patch::new()
//!     .set("firstName", "Aliya")
//!     .set("age", 32i32)
//!     .compile(&columns)?;
//!
//! assert_eq!(update.set_clause(), r#""first_name"=$1, "age"=$2"#);
//! assert_eq!(update.values().len(), 2);
//! # Ok::<(), pgpatch::PatchError>(())
//! ```
//!
//! Embedding the fragment into a full statement, with the WHERE parameter
//! numbered after the SET values:
//!
//! ```
//! use pgpatch::{ColumnMap, Patch};
//!
//! let update = Patch::new()
//!     .set("status", "inactive")
//!     .compile(&ColumnMap::new())?;
//!
//! let sql = format!(
//!     "UPDATE users SET {} WHERE id = ${} RETURNING *",
//!     update.set_clause(),
//!     update.len() + 1,
//! );
//! assert_eq!(sql, r#"UPDATE users SET "status"=$1 WHERE id = $2 RETURNING *"#);
//! # Ok::<(), pgpatch::PatchError>(())
//! ```
//!
//! An empty payload is a caller error, not a no-op:
//!
//! ```
//! use pgpatch::{ColumnMap, Patch};
//!
//! let err = Patch::new().compile(&ColumnMap::new()).unwrap_err();
//! assert!(err.is_bad_request());
//! ```

pub mod columns;
pub mod error;
pub mod param;
pub mod patch;

pub use columns::{ColumnMap, quote_column};
pub use error::{PatchError, PatchResult};
pub use param::{Param, Params};
pub use patch::{CompiledSet, Patch};
