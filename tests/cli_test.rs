//! Integration tests for the hazel-setup binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Config that needs no host tools and pulls assets with a no-op program.
const NO_TOOLS_CONFIG: &str = r#"
requirements: []
assets:
  program: "true"
  args: []
"#;

/// Create a checkout layout: `<root>/scripts/setup.yml` and `<root>/vendor/`.
fn setup_checkout(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("scripts")).unwrap();
    fs::create_dir_all(temp.path().join("vendor")).unwrap();
    fs::write(temp.path().join("scripts").join("setup.yml"), config).unwrap();
    temp
}

fn setup_cmd(start_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("hazel-setup"));
    cmd.current_dir(start_dir);
    cmd.env_remove("VULKAN_SDK");
    cmd.arg("--non-interactive");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("hazel-setup"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Prepare a Hazel checkout"))
        .stdout(predicate::str::contains("--toolchain"))
        .stdout(predicate::str::contains("--dry-run"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("hazel-setup"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_dry_run_prints_invocations() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.arg("--dry-run");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Would run: git lfs pull"))
        .stdout(predicate::str::contains("Running premake..."))
        .stdout(predicate::str::contains("vs2022"))
        .stderr(predicate::str::contains("Vulkan SDK not installed."))
        .stderr(predicate::str::contains("Vulkan SDK debug libs not found."));
    Ok(())
}

#[test]
fn cli_toolchain_flag_overrides_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.args(["--dry-run", "--toolchain", "gmake2"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gmake2"))
        .stdout(predicate::str::contains("vs2022").not());
    Ok(())
}

#[test]
fn cli_toolchain_ignores_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.env("HAZEL_TOOLCHAIN", "xcode4");
    cmd.arg("--dry-run");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vs2022"))
        .stdout(predicate::str::contains("xcode4").not());
    Ok(())
}

#[test]
fn cli_missing_project_root_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.args(["--project", "does-not-exist"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Project root not found"));
    Ok(())
}

#[test]
fn cli_unknown_config_key_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("steps:\n  hello: {}\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_invalid_config_value_reports_validation_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\ngenerator:\n  toolchain: \"\"\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("generator.toolchain"))
        .stderr(predicate::str::contains("Failed to parse config").not());
    Ok(())
}

#[test]
fn cli_flag_fixes_invalid_config_value() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\ngenerator:\n  toolchain: \"\"\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.args(["--dry-run", "--toolchain", "vs2019"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vs2019"));
    Ok(())
}

#[test]
fn cli_explicit_config_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.args(["--config", "missing.yml"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_unsatisfiable_requirement_fails_early() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout(
        r#"
requirements:
  - name: hazel-missing-tool
    check: ["hazel-missing-tool-5f3a", "--version"]
    install_hint: Install it from the internal mirror
"#,
    );
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Running premake...").not())
        .stderr(predicate::str::contains("Missing requirement"))
        .stderr(predicate::str::contains("hazel-missing-tool"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_runs_generator_with_single_argument() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let temp = setup_checkout(NO_TOOLS_CONFIG);
    let generator = temp.path().join("vendor").join("premake5");
    fs::write(
        &generator,
        "#!/bin/sh\necho \"$#:$*\" > generated.txt\necho \"Done (1 workspace)\"\n",
    )?;
    fs::set_permissions(&generator, fs::Permissions::from_mode(0o755))?;

    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.args(["--toolchain", "gmake2"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Running premake..."))
        .stdout(predicate::str::contains("Done (1 workspace)"))
        .stdout(predicate::str::contains("Setup complete!"));

    let generated = fs::read_to_string(temp.path().join("generated.txt"))?;
    assert_eq!(generated.trim(), "1:gmake2");
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_failing_asset_pull_skips_generator() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\nassets:\n  program: \"false\"\n  args: []\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Running premake...").not())
        .stderr(predicate::str::contains("Command failed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_missing_generator_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout(NO_TOOLS_CONFIG);
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Running premake..."))
        .stderr(predicate::str::contains("Command not found"));
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_checkout("requirements: []\n");
    let mut cmd = setup_cmd(&temp.path().join("scripts"));
    cmd.args(["--debug", "--dry-run", "--no-color"]);
    cmd.assert().success();
    Ok(())
}

#[test]
fn cli_rejects_positional_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("hazel-setup"));
    cmd.arg("run");
    cmd.assert().failure();
    Ok(())
}
