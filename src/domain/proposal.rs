use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Submitted bid or plan, as published by the proposal source.
///
/// The record layout belongs to the publisher, so members are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proposal(pub Map<String, Value>);
