//! Catalog metrics, recorded through the `metrics` facade.
//!
//! Nothing is exported unless the binary installs a recorder.

use metrics::counter;

/// Documents dropped from list, search or batch results because they could
/// not be decoded
pub const UNDECODABLE_DOCUMENTS: &str = "catalog_undecodable_documents_total";

/// Products created through the service
pub const PRODUCTS_CREATED: &str = "catalog_products_created_total";

pub fn record_undecodable(operation: &'static str, count: usize) {
    counter!(UNDECODABLE_DOCUMENTS, "operation" => operation).increment(count as u64);
}

pub fn record_created() {
    counter!(PRODUCTS_CREATED).increment(1);
}
