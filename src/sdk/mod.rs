//! Graphics SDK presence checks.
//!
//! Two probes sit behind the [`SdkProbe`] trait: one for the SDK itself and
//! one for its debug libraries. Probes read only the state they were built
//! with plus the filesystem, never fail, and never change anything. A missing
//! SDK is advisory: the caller reports it and carries on.
//!
//! # Example
//!
//! ```
//! use hazel_setup::sdk::{DebugLibsProbe, SdkProbe};
//!
//! let probe = DebugLibsProbe::new("Vulkan SDK", "/nonexistent/shaderc_sharedd.lib");
//! let result = probe.check();
//! assert!(!result.present);
//! assert_eq!(result.advisory, "Vulkan SDK debug libs not found.");
//! ```

pub mod probe;
pub mod version;

pub use probe::{probes_for, DebugLibsProbe, SdkInstalledProbe};
pub use version::extract_version;

/// Outcome of a single environment probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Probe that produced this result.
    pub probe: String,
    /// Whether the checked capability is installed.
    pub present: bool,
    /// What was found, or where the probe looked.
    pub detail: String,
    /// Message reported when `present` is false.
    pub advisory: String,
}

impl CheckResult {
    /// A positive result.
    pub fn present(probe: &str, detail: impl Into<String>, advisory: &str) -> Self {
        Self {
            probe: probe.to_string(),
            present: true,
            detail: detail.into(),
            advisory: advisory.to_string(),
        }
    }

    /// A negative result.
    pub fn absent(probe: &str, detail: impl Into<String>, advisory: &str) -> Self {
        Self {
            probe: probe.to_string(),
            present: false,
            detail: detail.into(),
            advisory: advisory.to_string(),
        }
    }
}

/// A side-effect free check for an installed SDK capability.
pub trait SdkProbe {
    /// Short identifier (e.g. "sdk", "debug-libs").
    fn name(&self) -> &str;

    /// Run the check.
    fn check(&self) -> CheckResult;
}
