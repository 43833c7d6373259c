//! Typed column decoders shared by repository row mappers.

use super::{RepoError, RepoResult};
use rusqlite::types::{Type, ValueRef};
use rusqlite::Row;

/// Reads an integer column; any other storage class is a decode error.
pub(crate) fn integer_column(row: &Row<'_>, idx: usize, column: &'static str) -> RepoResult<i64> {
    match row.get_ref(idx)? {
        ValueRef::Integer(value) => Ok(value),
        other => Err(RepoError::Decode {
            column,
            expected: "integer",
            found: other.data_type(),
        }),
    }
}

/// Reads a column as optional text.
///
/// NULL maps to `None`; numbers map to their textual representation;
/// text and blobs must be valid UTF-8.
pub(crate) fn text_column(
    row: &Row<'_>,
    idx: usize,
    column: &'static str,
) -> RepoResult<Option<String>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(value) => Ok(Some(value.to_string())),
        ValueRef::Real(value) => Ok(Some(value.to_string())),
        ValueRef::Text(bytes) => utf8(bytes, column, Type::Text).map(Some),
        ValueRef::Blob(bytes) => utf8(bytes, column, Type::Blob).map(Some),
    }
}

fn utf8(bytes: &[u8], column: &'static str, found: Type) -> RepoResult<String> {
    String::from_utf8(bytes.to_vec()).map_err(|_| RepoError::Decode {
        column,
        expected: "utf-8 text",
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::{integer_column, text_column};
    use crate::repo::{RepoError, RepoResult};
    use rusqlite::types::Type;
    use rusqlite::Connection;

    fn decode_first_row<T>(
        sql: &str,
        decode: impl Fn(&rusqlite::Row<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare(sql).unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();
        decode(row)
    }

    #[test]
    fn integer_column_rejects_text() {
        let err =
            decode_first_row("SELECT 'abc';", |row| integer_column(row, 0, "developer.id"))
                .unwrap_err();
        assert!(matches!(
            err,
            RepoError::Decode {
                column: "developer.id",
                expected: "integer",
                found: Type::Text,
            }
        ));
    }

    #[test]
    fn integer_column_rejects_null_and_real() {
        let decode_id = |sql: &str| decode_first_row(sql, |row| integer_column(row, 0, "profile.id"));
        assert!(decode_id("SELECT NULL;").is_err());
        assert!(decode_id("SELECT 1.5;").is_err());
        assert_eq!(decode_id("SELECT 42;").unwrap(), 42);
    }

    #[test]
    fn text_column_coerces_numbers_and_maps_null_to_none() {
        let decoded = decode_first_row("SELECT NULL, 102030405, 2.5, 'mail';", |row| {
            Ok((
                text_column(row, 0, "a")?,
                text_column(row, 1, "b")?,
                text_column(row, 2, "c")?,
                text_column(row, 3, "d")?,
            ))
        })
        .unwrap();
        assert_eq!(
            decoded,
            (
                None,
                Some("102030405".to_string()),
                Some("2.5".to_string()),
                Some("mail".to_string())
            )
        );
    }

    #[test]
    fn text_column_rejects_invalid_utf8_blob() {
        let err =
            decode_first_row("SELECT x'ff';", |row| text_column(row, 0, "developer.phone"))
                .unwrap_err();
        assert!(matches!(
            err,
            RepoError::Decode {
                column: "developer.phone",
                found: Type::Blob,
                ..
            }
        ));
    }
}
