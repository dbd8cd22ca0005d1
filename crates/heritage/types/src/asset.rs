//! Deployment descriptor

use serde::Serialize;

/// Read-only strings identifying a registry deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AssetDescriptor {
    pub name: &'static str,
    pub symbol: &'static str,
}

impl AssetDescriptor {
    pub const HERITAGE: AssetDescriptor = AssetDescriptor {
        name: "Heritage",
        symbol: "A^3",
    };
}
