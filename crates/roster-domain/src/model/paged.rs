//! Paged view over a record listing

use serde::{Deserialize, Serialize};

/// One page of records together with the paging request that produced it
///
/// `page_number` and `page_size` echo the request verbatim; `total_records`
/// counts the whole backing collection, not just this page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_records: usize,
}
