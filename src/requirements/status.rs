//! Requirement status types.
//!
//! Each requirement check produces a `RequirementStatus` that describes
//! whether the tool is usable and, if it was not at first, what happened.

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    /// Check command ran and exited zero.
    Satisfied,

    /// Tool was missing, the install command ran, and the check now passes.
    Installed,

    /// Tool is not usable.
    Missing {
        /// Whether an install command is configured for it
        installable: bool,
        /// Human-readable install instructions
        install_hint: Option<String>,
    },
}

impl RequirementStatus {
    /// Whether the bootstrap can proceed past this requirement.
    pub fn is_satisfied(&self) -> bool {
        matches!(
            self,
            RequirementStatus::Satisfied | RequirementStatus::Installed
        )
    }
}

/// The checked status of one named requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementReport {
    /// The requirement name that was checked
    pub requirement: String,
    /// The status of the requirement
    pub status: RequirementStatus,
}
