//! Platform capability probe (driven/secondary port)
//!
//! Reports whether the app runs inside a device-native shell with direct
//! filesystem access ("hybrid") or in a browser-only runtime ("web"). The
//! answer selects the persistence strategy once, at construction time;
//! operations never branch on the platform inline.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Kind of host runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Device-native shell with direct filesystem access
    Hybrid,
    /// Browser-only runtime; transient capture references do not survive
    /// a restart
    Web,
}

impl Platform {
    /// Whether the host is a device-native shell
    #[must_use]
    pub fn is_hybrid(&self) -> bool {
        matches!(self, Platform::Hybrid)
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Hybrid => write!(f, "hybrid"),
            Platform::Web => write!(f, "web"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hybrid" | "native" => Ok(Platform::Hybrid),
            "web" | "browser" => Ok(Platform::Web),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Port trait for probing the host runtime kind
pub trait IPlatformProbe: Send + Sync {
    /// The kind of runtime hosting the app
    fn platform(&self) -> Platform;
}

/// Probe that always reports a fixed platform
///
/// Used by wiring layers that already know the host kind (CLI flag,
/// build-time knowledge).
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatformProbe(pub Platform);

impl IPlatformProbe for FixedPlatformProbe {
    fn platform(&self) -> Platform {
        self.0
    }
}
