//! Requirement remediation.
//!
//! Offers to install missing requirements through their configured install
//! command, then re-checks them. Anything still missing blocks the run.
//! A dry run only prints the install command it would have run.

use crate::config::RequirementConfig;
use crate::error::{Result, SetupError};
use crate::shell::ProcessInvocation;
use crate::ui::{Prompt, UserInterface};

use super::checker::RequirementChecker;
use super::status::{RequirementReport, RequirementStatus};

/// Check every requirement, installing what can be installed.
///
/// Returns the per-requirement reports when everything is satisfied, or
/// `RequirementMissing` naming every requirement that is still missing.
///
/// With `dry_run` set, install commands are printed instead of run, and a
/// requirement that has one does not block the rest of the preview.
pub fn ensure_requirements(
    requirements: &[RequirementConfig],
    checker: &mut RequirementChecker<'_>,
    ui: &mut dyn UserInterface,
    dry_run: bool,
) -> Result<Vec<RequirementReport>> {
    let mut reports = Vec::with_capacity(requirements.len());
    let mut blocking = Vec::new();

    for requirement in requirements {
        let status = match checker.check_one(requirement) {
            missing @ RequirementStatus::Missing { .. } if dry_run => {
                preview_install(requirement, ui);
                missing
            }
            RequirementStatus::Missing { .. } => handle_missing(requirement, checker, ui)?,
            status => status,
        };

        if let RequirementStatus::Missing {
            installable,
            install_hint,
        } = &status
        {
            ui.warning(&format!("Missing requirement '{}'", requirement.name));
            if let Some(hint) = install_hint {
                ui.show_hint(hint);
            }
            if !(dry_run && *installable) {
                blocking.push(requirement.name.clone());
            }
        }

        reports.push(RequirementReport {
            requirement: requirement.name.clone(),
            status,
        });
    }

    if blocking.is_empty() {
        Ok(reports)
    } else {
        Err(SetupError::RequirementMissing {
            requirement: blocking.join(", "),
            message: "not available on this host".to_string(),
        })
    }
}

fn preview_install(requirement: &RequirementConfig, ui: &mut dyn UserInterface) {
    if let Some(invocation) = requirement
        .install
        .as_deref()
        .and_then(ProcessInvocation::from_argv)
    {
        ui.message(&format!("Would run: {}", invocation.display()));
    }
}

fn handle_missing(
    requirement: &RequirementConfig,
    checker: &mut RequirementChecker<'_>,
    ui: &mut dyn UserInterface,
) -> Result<RequirementStatus> {
    let missing = RequirementStatus::Missing {
        installable: requirement.install.is_some(),
        install_hint: requirement.install_hint.clone(),
    };

    let Some(invocation) = requirement
        .install
        .as_deref()
        .and_then(ProcessInvocation::from_argv)
    else {
        return Ok(missing);
    };

    if ui.is_interactive() {
        let prompt = Prompt::confirm(
            format!("install_{}", requirement.name),
            format!("Install {}? ({})", requirement.name, invocation.display()),
            true,
        );
        if !ui.confirm(&prompt)? {
            return Ok(missing);
        }
    }

    tracing::info!(requirement = %requirement.name, "Installing requirement");
    let mut spinner = ui.start_spinner(&format!("Installing {}...", requirement.name));

    let installed = match checker.runner().run(&invocation) {
        Ok(outcome) if outcome.success => true,
        Ok(outcome) => {
            tracing::warn!(
                requirement = %requirement.name,
                exit_code = ?outcome.exit_code,
                "Install command failed"
            );
            false
        }
        Err(e) => {
            tracing::warn!(requirement = %requirement.name, error = %e, "Install command failed");
            false
        }
    };

    checker.invalidate(&requirement.name);
    if installed && checker.is_available(requirement) {
        spinner.finish_success(&format!("Installed {}", requirement.name));
        Ok(RequirementStatus::Installed)
    } else {
        spinner.finish_error(&format!("Failed to install {}", requirement.name));
        Ok(missing)
    }
}
