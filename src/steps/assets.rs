//! Large-file asset synchronization.

use std::path::Path;

use crate::config::AssetConfig;
use crate::error::Result;
use crate::shell::ProcessInvocation;

use super::executor::{execute_step, StepContext, StepResult};

/// Build the asset pull invocation, run in `project_root`.
pub fn asset_invocation(config: &AssetConfig, project_root: &Path) -> ProcessInvocation {
    ProcessInvocation::new(&config.program)
        .args(config.args.iter().cloned())
        .current_dir(project_root)
}

/// Pull large binary assets (`git lfs pull` by default). No retry.
pub fn sync_assets(
    config: &AssetConfig,
    project_root: &Path,
    ctx: &mut StepContext<'_>,
) -> Result<StepResult> {
    let invocation = asset_invocation(config, project_root);
    execute_step(
        "assets",
        "Pulling large-file assets...",
        &invocation,
        config.on_failure,
        ctx,
    )
}
