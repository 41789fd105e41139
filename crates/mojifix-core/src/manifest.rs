use serde_json::Value;

use crate::error::{MojifixError, Result};

/// Parse the services manifest: a JSON array of objects, each optionally
/// carrying a string `filename`.
///
/// - Entries without `filename` (or with null / empty string) are skipped.
/// - The result is deduplicated and sorted, so processing order never
///   depends on manifest order.
/// - Anything shape-wise unexpected (non-array top level, non-object entry,
///   non-string filename) is a fatal format error: a corrupt manifest means
///   the target set is unknowable.
pub fn parse(json: &str) -> Result<Vec<String>> {
    let data: Value = serde_json::from_str(json)?;
    let entries = data
        .as_array()
        .ok_or_else(|| MojifixError::ManifestFormat("top-level value must be an array".into()))?;

    let mut names: Vec<String> = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let obj = entry
            .as_object()
            .ok_or_else(|| MojifixError::ManifestFormat(format!("entry {i} is not an object")))?;
        match obj.get("filename") {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if s.is_empty() => {}
            Some(Value::String(s)) => names.push(s.clone()),
            Some(_) => {
                return Err(MojifixError::ManifestFormat(format!(
                    "entry {i}: filename is not a string"
                )))
            }
        }
    }

    names.sort();
    names.dedup();
    Ok(names)
}
