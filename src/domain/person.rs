use serde::{Deserialize, Serialize};

pub type PersonId = u64;

/// A participant in the bill split.
/// Identity and name are immutable once assigned; only the share (and the
/// amount derived from it) changes over a person's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Allocated share of the bill, always within [0, 100].
    pub percentage: f64,
    /// Monetary amount derived from the current bill total.
    /// `None` until a bill amount has been applied to this roster.
    pub amount: Option<f64>,
}

impl Person {
    /// Create a participant with a zero share and no derived amount.
    pub fn new(id: PersonId, name: String) -> Self {
        Self {
            id,
            name,
            percentage: 0.0,
            amount: None,
        }
    }
}
