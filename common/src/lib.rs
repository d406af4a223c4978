//! Common library exports shared between the backend and API consumers.

extern crate serde;


pub mod search_params;
pub mod search_result;
pub mod category;
pub mod location_detail;
