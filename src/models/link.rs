//! Resolution record produced by batch processing.

use serde::{Deserialize, Serialize};

/// A single reference together with its resolved form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The reference as it appeared in the input
    pub reference: String,

    /// The absolute URI it resolved to
    pub resolved: String,
}
