//! Build-file generator invocation.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::shell::{resolve_against, with_exe_suffix, ProcessInvocation};

use super::executor::{execute_step, StepContext, StepResult};

/// Announcement printed before the generator runs.
pub const GENERATOR_BANNER: &str = "Running premake...";

/// Absolute path of the vendored generator executable.
pub fn generator_path(config: &GeneratorConfig, project_root: &Path) -> PathBuf {
    with_exe_suffix(&resolve_against(project_root, &config.executable))
}

/// Build the generator invocation: the executable plus exactly one argument,
/// the toolchain target.
pub fn generator_invocation(config: &GeneratorConfig, project_root: &Path) -> ProcessInvocation {
    ProcessInvocation::new(generator_path(config, project_root))
        .arg(&config.toolchain)
        .current_dir(project_root)
}

/// Generate build files for the configured toolchain.
pub fn generate_build_files(
    config: &GeneratorConfig,
    project_root: &Path,
    ctx: &mut StepContext<'_>,
) -> Result<StepResult> {
    ctx.ui.message(GENERATOR_BANNER);
    let invocation = generator_invocation(config, project_root);
    execute_step(
        "generator",
        &format!("Generating {} project files...", config.toolchain),
        &invocation,
        config.on_failure,
        ctx,
    )
}
