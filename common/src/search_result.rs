use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LocationSearchResults {
    pub results: Vec<serde_json::Map<String, serde_json::Value>>,
    pub facets: BTreeMap<String, Vec<FacetBucket>>,
}

/// One facet value and the number of matching documents, as reported
/// by the search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub value: serde_json::Value,
    pub count: u64,
}
