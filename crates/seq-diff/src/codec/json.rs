//! JSON codec for sequence patches.
//!
//! Wire shape of a single operation:
//!
//! ```text
//! { "type": "delete", "index": 2 }
//! { "type": "insert", "index": 2, "value": <value> }
//! ```
//!
//! A patch is a JSON array of operations in replay order.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::types::{Op, Patch, PatchError};

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value`.
///
/// Fails only when `T` itself cannot be represented as JSON.
pub fn to_json<T: Serialize>(op: &Op<T>) -> Result<Value, PatchError> {
    Ok(match op {
        Op::Delete { index } => json!({
            "type": "delete",
            "index": index
        }),
        Op::Insert { index, value } => {
            let value =
                serde_json::to_value(value).map_err(|e| PatchError::InvalidOp(e.to_string()))?;
            json!({
                "type": "insert",
                "index": index,
                "value": value
            })
        }
    })
}

/// Serialize a whole patch to a JSON array.
pub fn to_json_patch<T: Serialize>(ops: &[Op<T>]) -> Result<Value, PatchError> {
    ops.iter()
        .map(to_json)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

// ── Deserialization ───────────────────────────────────────────────────────

fn decode_index(v: Option<&Value>) -> Result<usize, PatchError> {
    let raw = v
        .ok_or_else(|| PatchError::InvalidOp("missing 'index' field".into()))?
        .as_u64()
        .ok_or_else(|| PatchError::InvalidOp("'index' must be a non-negative integer".into()))?;
    usize::try_from(raw).map_err(|_| PatchError::InvalidOp(format!("index out of range: {raw}")))
}

/// Deserialize an `Op` from a `serde_json::Value`.
pub fn from_json<T: DeserializeOwned>(v: &Value) -> Result<Op<T>, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_type = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp("missing 'type' field".into()))?;
    let index = decode_index(obj.get("index"))?;

    match op_type {
        "delete" => Ok(Op::Delete { index }),
        "insert" => {
            let raw = obj
                .get("value")
                .ok_or_else(|| PatchError::InvalidOp("insert requires 'value'".into()))?;
            let value = T::deserialize(raw).map_err(|e| PatchError::InvalidOp(e.to_string()))?;
            Ok(Op::Insert { index, value })
        }
        other => Err(PatchError::InvalidOp(format!("unknown op type: {other}"))),
    }
}

/// Deserialize a patch from a JSON array.
pub fn from_json_patch<T: DeserializeOwned>(v: &Value) -> Result<Patch<T>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
