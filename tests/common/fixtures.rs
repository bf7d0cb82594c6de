//! Canned databases used across harnesses.

use super::builders::{DbBuilder, TestDb};
use serde_json::json;

/// The example database: one user with a tag list.
pub fn users_db() -> TestDb {
    DbBuilder::new()
        .json("users", "u1", json!({"name": "alice", "tags": ["x", "y"]}))
        .build()
}

/// Several buckets with mixed shapes:
///
/// - `users`: heterogeneous records, one nested object, one non-JSON value
/// - `orders`: keys sharing prefixes (`o1`, `o10`, `o2`)
/// - `empty`: no keys at all
pub fn shop_db() -> TestDb {
    DbBuilder::new()
        .json(
            "users",
            "u2",
            json!({"name": "bob", "address": {"city": "Oslo"}}),
        )
        .json("users", "u1", json!({"name": "alice", "role": "admin"}))
        .raw("users", b"u3", b"not json at all")
        .json("orders", "o1", json!({"item": "lamp", "qty": 1}))
        .json("orders", "o10", json!({"item": "desk", "qty": 2}))
        .json("orders", "o2", json!({"item": "chair", "qty": 4}))
        .bucket("empty")
        .build()
}
