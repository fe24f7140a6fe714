//! Caller-supplied emission order.

use serde::{Deserialize, Serialize};

/// A total order over exchange indices, intended to respect inter-request
/// dependencies (a login before the request using its token, for example).
///
/// The order may list more indices than are selected; the extras are
/// dependencies that were not chosen for emission and are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingPlan {
    /// Indices in the order they should be emitted.
    pub topological_order: Vec<usize>,
}

impl OrderingPlan {
    /// Creates a plan from an explicit order.
    #[must_use]
    pub fn new(order: impl IntoIterator<Item = usize>) -> Self {
        Self {
            topological_order: order.into_iter().collect(),
        }
    }

    /// Creates the identity plan `0..count`, i.e. capture order.
    #[must_use]
    pub fn capture_order(count: usize) -> Self {
        Self::new(0..count)
    }
}

/// How the emission order is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OrderingStrategy {
    /// Emit in capture order.
    #[default]
    Capture,
    /// Emit in a caller-supplied order.
    Explicit(OrderingPlan),
    /// Derive the order from variables produced by extractions and consumed
    /// by later requests.
    Dependencies,
}
