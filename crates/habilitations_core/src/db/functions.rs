//! Store-side SQL functions registered on every connection.
//!
//! # Responsibility
//! - Provide `SHA2(value, bits)` so password hashing happens inside SQL
//!   statements, the same way a MySQL-backed store computes it.
//!
//! # Invariants
//! - Output is the lowercase hex digest of the value's UTF-8 text.
//! - NULL input or an unsupported width yields NULL, never an error.
//! - The function is deterministic and may be used in indexes and `WHERE`.

use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

/// SQL name of the registered hash function.
pub const SHA2_FUNCTION: &str = "SHA2";

/// Registers the hash functions on `conn`.
///
/// Re-registering on the same connection replaces the previous definition.
pub fn register_hash_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        SHA2_FUNCTION,
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        sha2_sql,
    )
}

/// Computes the hex digest for one of the supported SHA-2 widths.
///
/// `bits == 0` selects SHA-256.
pub fn sha2_hex(input: &[u8], bits: i64) -> Option<String> {
    let digest = match bits {
        224 => hex::encode(Sha224::digest(input)),
        0 | 256 => hex::encode(Sha256::digest(input)),
        384 => hex::encode(Sha384::digest(input)),
        512 => hex::encode(Sha512::digest(input)),
        _ => return None,
    };
    Some(digest)
}

fn sha2_sql(ctx: &Context<'_>) -> rusqlite::Result<Option<String>> {
    let bits = match ctx.get_raw(1) {
        ValueRef::Integer(bits) => bits,
        _ => return Ok(None),
    };

    let digest = match ctx.get_raw(0) {
        ValueRef::Null => None,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => sha2_hex(bytes, bits),
        ValueRef::Integer(value) => sha2_hex(value.to_string().as_bytes(), bits),
        ValueRef::Real(value) => sha2_hex(value.to_string().as_bytes(), bits),
    };
    Ok(digest)
}
