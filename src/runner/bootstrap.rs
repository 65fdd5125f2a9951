//! Bootstrap sequence orchestration.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::SetupConfig;
use crate::error::Result;
use crate::requirements::{ensure_requirements, RequirementChecker, RequirementReport};
use crate::sdk::{probes_for, CheckResult};
use crate::shell::CommandRunner;
use crate::steps::{generate_build_files, sync_assets, StepContext, StepResult};
use crate::ui::{format_duration, UserInterface};
use crate::workdir::{self, WorkingDir};

/// Options for a bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Directory the bootstrap was started from.
    pub start_dir: PathBuf,
    /// Print the external invocations instead of running them.
    pub dry_run: bool,
}

/// Result of a completed bootstrap run.
#[derive(Debug)]
pub struct BootstrapReport {
    /// Canonical project root the working directory was moved to.
    pub project_root: PathBuf,
    /// Requirement statuses, in configured order.
    pub requirements: Vec<RequirementReport>,
    /// SDK probe results, in probe order.
    pub sdk_checks: Vec<CheckResult>,
    /// Asset pull result (its outcome is None on a dry run).
    pub assets: StepResult,
    /// Generator result (its outcome is None on a dry run).
    pub generator: StepResult,
    /// Total duration.
    pub duration: Duration,
}

impl BootstrapReport {
    /// Advisory messages for every SDK probe that came back absent.
    pub fn advisories(&self) -> Vec<&str> {
        self.sdk_checks
            .iter()
            .filter(|c| !c.present)
            .map(|c| c.advisory.as_str())
            .collect()
    }
}

/// Runs the fixed bootstrap sequence:
/// requirements, working directory, SDK checks, assets, generator.
pub struct Bootstrap<'a> {
    config: &'a SetupConfig,
}

impl<'a> Bootstrap<'a> {
    /// Create a bootstrap for `config`.
    pub fn new(config: &'a SetupConfig) -> Self {
        Self { config }
    }

    /// Run against the real process environment.
    pub fn run(
        &self,
        options: &BootstrapOptions,
        runner: &mut dyn CommandRunner,
        workdir: &mut dyn WorkingDir,
        ui: &mut dyn UserInterface,
    ) -> Result<BootstrapReport> {
        self.run_with_env(options, runner, workdir, ui, |var| std::env::var(var))
    }

    /// Run with a custom environment lookup.
    ///
    /// Any fatal error stops the sequence; nothing after it runs.
    pub fn run_with_env<F>(
        &self,
        options: &BootstrapOptions,
        runner: &mut dyn CommandRunner,
        workdir: &mut dyn WorkingDir,
        ui: &mut dyn UserInterface,
        env_fn: F,
    ) -> Result<BootstrapReport>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let start = Instant::now();
        debug!(config = ?self.config, "Resolved configuration");
        ui.show_header("Hazel setup");

        info!("Checking requirements");
        let requirements = {
            let mut checker = RequirementChecker::new(&mut *runner);
            let requirements = &self.config.requirements;
            ensure_requirements(requirements, &mut checker, ui, options.dry_run)?
        };

        let project_root = workdir::normalize(workdir, &options.start_dir, &self.config.project)?;
        info!("Project root: {}", project_root.display());
        if let Some(marker) = self.root_marker() {
            if !workdir::is_project_root(&project_root, marker) {
                warn!(
                    "{} not found under {}",
                    marker.display(),
                    project_root.display()
                );
            }
        }

        info!("Checking {}", self.config.sdk.name);
        let sdk_checks = self.check_sdk(&project_root, &env_fn, ui);

        let mut ctx = StepContext {
            runner: &mut *runner,
            ui: &mut *ui,
            dry_run: options.dry_run,
        };
        let assets = sync_assets(&self.config.assets, &project_root, &mut ctx)?;
        let generator = generate_build_files(&self.config.generator, &project_root, &mut ctx)?;

        let duration = start.elapsed();
        if options.dry_run {
            ui.message("Dry run complete. No assets were pulled and no project files generated.");
        } else if assets.succeeded() && generator.succeeded() {
            ui.success(&format!("Setup complete! ({})", format_duration(duration)));
        } else {
            ui.warning("Setup finished with warnings.");
        }

        Ok(BootstrapReport {
            project_root,
            requirements,
            sdk_checks,
            assets,
            generator,
            duration,
        })
    }

    fn check_sdk<F>(
        &self,
        project_root: &Path,
        env_fn: &F,
        ui: &mut dyn UserInterface,
    ) -> Vec<CheckResult>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        probes_for(&self.config.sdk, project_root, env_fn)
            .iter()
            .map(|probe| {
                let result = probe.check();
                if result.present {
                    ui.success(&result.detail);
                } else {
                    warn!(probe = %result.probe, "{}", result.detail);
                    ui.warning(&result.advisory);
                }
                result
            })
            .collect()
    }

    /// Directory containing the vendored generator, used to recognise the root.
    fn root_marker(&self) -> Option<&Path> {
        self.config
            .generator
            .executable
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
