//! Procurement record types
//!
//! Plain data holders exchanged as JSON. Nothing here validates; the wire
//! names follow the camelCase members already published for these records.

#![allow(dead_code)]

pub mod procurement_plan;
pub mod proposal;
pub mod selection_consultant;

pub use procurement_plan::*;
pub use proposal::*;
pub use selection_consultant::*;
