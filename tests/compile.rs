//! Integration tests for patch compilation through the public API.

use pgpatch::{ColumnMap, Patch};
use tokio_postgres::types::{ToSql, Type};

#[test]
fn translation_and_ordering() {
    let columns = ColumnMap::new()
        .map("firstName", "first_name")
        .map("isAdmin", "is_admin");

    let update = Patch::new()
        .set("firstName", "Aliya")
        .set("age", 32i32)
        .set("isAdmin", true)
        .compile(&columns)
        .unwrap();

    assert_eq!(
        update.set_clause(),
        r#""first_name"=$1, "age"=$2, "is_admin"=$3"#
    );
    assert_eq!(update.params_ref().len(), 3);
}

#[test]
fn values_align_with_placeholders() {
    let update = Patch::new()
        .set("a", 7i32)
        .set("b", 9i32)
        .compile(&ColumnMap::new())
        .unwrap();

    // Encode each value the way a client would bind it: value i must be the
    // one the patch assigned to placeholder $(i+1).
    let mut encoded = Vec::new();
    for param in update.values().iter() {
        let mut buf = bytes::BytesMut::new();
        param.as_sql().to_sql_checked(&Type::INT4, &mut buf).unwrap();
        encoded.push(buf.to_vec());
    }
    assert_eq!(encoded[0], 7i32.to_be_bytes());
    assert_eq!(encoded[1], 9i32.to_be_bytes());
}

#[test]
fn where_tail_continues_numbering() {
    let columns = ColumnMap::new().map("firstName", "first_name");
    let update = Patch::new()
        .set("firstName", "Aliya")
        .set("age", 32i32)
        .compile(&columns)
        .unwrap();

    let sql = format!(
        "UPDATE users SET {} WHERE username = ${} RETURNING username",
        update.set_clause(),
        update.len() + 1,
    );
    assert_eq!(
        sql,
        r#"UPDATE users SET "first_name"=$1, "age"=$2 WHERE username = $3 RETURNING username"#
    );

    let mut params = update.params_ref();
    let username = "aliya";
    params.push(&username as &(dyn ToSql + Sync));
    assert_eq!(params.len(), 3);
}

#[test]
fn offset_compile_slots_after_leading_params() {
    let update = Patch::new()
        .set("status", "archived")
        .set("age", 50i32)
        .compile_with_offset(&ColumnMap::new(), 1)
        .unwrap();
    assert_eq!(update.set_clause(), r#""status"=$2, "age"=$3"#);
    assert_eq!(update.len(), 2);
}

#[test]
fn from_json_preserves_document_order() {
    let body = serde_json::json!({
        "firstName": "Aliya",
        "age": 32,
        "email": "aliya@example.com",
    });
    let object = body.as_object().unwrap();

    let columns = ColumnMap::new().map("firstName", "first_name");
    let update = Patch::from_json(object).compile(&columns).unwrap();

    assert_eq!(
        update.set_clause(),
        r#""first_name"=$1, "age"=$2, "email"=$3"#
    );
    assert_eq!(update.values().len(), 3);
}

#[test]
fn empty_json_object_is_bad_request() {
    let body = serde_json::json!({});
    let err = Patch::from_json(body.as_object().unwrap())
        .compile(&ColumnMap::new())
        .unwrap_err();
    assert!(err.is_bad_request());
}

#[test]
fn typed_params_compile() {
    let update = Patch::new()
        .set("id", uuid::Uuid::new_v4())
        .set("updated_at", chrono::Utc::now())
        .set_opt("note", Some("hi"))
        .compile(&ColumnMap::new())
        .unwrap();
    assert_eq!(update.set_clause(), r#""id"=$1, "updated_at"=$2, "note"=$3"#);
    assert_eq!(update.params_ref().len(), 3);
}

#[test]
fn compile_is_referentially_transparent() {
    let columns = ColumnMap::new().map("firstName", "first_name");
    let patch = Patch::new().set("firstName", "Aliya").set("age", 32i32);

    let first = patch.compile(&columns).unwrap();
    let second = patch.compile(&columns).unwrap();
    assert_eq!(first.set_clause(), second.set_clause());
    assert_eq!(first.values().len(), second.values().len());

    // Inputs are untouched: same fields, same translation table.
    assert_eq!(patch.fields().collect::<Vec<_>>(), vec!["firstName", "age"]);
    assert_eq!(columns.resolve("firstName"), "first_name");
}
