use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer who can rent vehicles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Customer {
    /// Unique customer identifier (e.g., "CL001")
    pub id: String,
    pub name: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Customer {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn info(&self) -> String {
        format!("Customer {}: {}", self.id, self.name)
    }
}
