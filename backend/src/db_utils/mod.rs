//! Clients for the external search index and the relational store.

pub mod azure_search_utils;
pub mod mysql_utils;
