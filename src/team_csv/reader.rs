use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::model::ProtectedFields;

/// Load the protected fields of a previously written team file, keyed for
/// reconciliation.
///
/// A missing file is not an error; it just means no history, so every
/// player is treated as new. Rows that cannot be read or carry no usable
/// key are skipped rather than failing the run. When two rows share a key,
/// the later one wins.
pub fn read_protected_fields<P: AsRef<Path>>(
    path: P,
) -> Result<HashMap<String, ProtectedFields>> {
    let path = path.as_ref();
    let mut existing = HashMap::new();

    if !path.exists() {
        log::debug!("No existing file at {}, treating all players as new", path.display());
        return Ok(existing);
    }

    let mut rdr = csv::Reader::from_path(path)?;
    for result in rdr.deserialize() {
        let record: ProtectedFields = match result {
            Ok(record) => record,
            Err(err) => {
                log::debug!("Skipping unreadable row in {}: {}", path.display(), err);
                continue;
            }
        };
        if let Some(key) = record.key() {
            let key = key.to_string();
            existing.insert(key, record);
        }
    }

    log::debug!(
        "Loaded {} existing players from {}",
        existing.len(),
        path.display()
    );
    Ok(existing)
}
