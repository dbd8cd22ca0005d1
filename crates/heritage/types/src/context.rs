//! Per-call context supplied by the host

use crate::{Amount, Identity};
use serde::{Deserialize, Serialize};

/// The authenticated caller and the value posted with the call.
///
/// The host resolves `caller` and moves `value` before handing the call
/// to the registry; the registry only validates and records them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    pub caller: Identity,
    #[serde(default)]
    pub value: Amount,
}

impl CallContext {
    /// A call carrying no value
    pub fn new(caller: Identity) -> Self {
        Self {
            caller,
            value: Amount::zero(),
        }
    }

    pub fn with_value(mut self, value: impl Into<Amount>) -> Self {
        self.value = value.into();
        self
    }
}
