//! Shared category models.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}
