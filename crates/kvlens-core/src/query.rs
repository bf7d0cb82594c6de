//! Query engine — prefix scan plus flattening, the unit each shell command runs.

use crate::config::DisplayConfig;
use crate::error::QueryError;
use crate::flatten::Flattener;
use crate::store::Store;
use crate::types::Table;

/// Scan `container` for keys starting with `prefix` and flatten the results
/// into tables in render order. The primary table's rows are in ascending
/// key order.
pub fn find(
    store: &Store,
    container: &str,
    prefix: &str,
    display: &DisplayConfig,
) -> Result<Vec<Table>, QueryError> {
    let mut records = store.scan(container, prefix.as_bytes())?;
    records.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(Flattener::from_config(display).flatten(&records))
}
