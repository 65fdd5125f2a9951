//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Running with no arguments
//! performs the full bootstrap sequence with built-in defaults.

use clap::Parser;
use std::path::PathBuf;

use crate::config::SetupConfig;
use crate::ui::OutputMode;

/// Prepare a Hazel checkout for building.
#[derive(Debug, Parser)]
#[command(name = "hazel-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides setup.yml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides the parent of the current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Toolchain target passed to the build-file generator
    #[arg(short, long)]
    pub toolchain: Option<String>,

    /// Preview commands without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by `--verbose` / `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Layer command-line overrides onto a loaded config.
    pub fn apply_to(&self, config: &mut SetupConfig) {
        if let Some(project) = &self.project {
            config.project.root = Some(project.clone());
        }
        if let Some(toolchain) = &self.toolchain {
            config.generator.toolchain = toolchain.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["hazel-setup"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "hazel-setup",
            "--config",
            "ci.yml",
            "--project",
            "/work/hazel",
            "--toolchain",
            "gmake2",
            "--dry-run",
            "--non-interactive",
            "--verbose",
            "--no-color",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("ci.yml")));
        assert_eq!(cli.project, Some(PathBuf::from("/work/hazel")));
        assert_eq!(cli.toolchain.as_deref(), Some("gmake2"));
        assert!(cli.dry_run);
        assert!(cli.non_interactive);
        assert!(cli.no_color);
        assert!(cli.debug);
        assert_eq!(cli.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["hazel-setup", "-v", "-q"]).is_err());
    }

    #[test]
    fn quiet_mode() {
        let cli = Cli::try_parse_from(["hazel-setup", "-q"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn apply_overrides_config() {
        let cli =
            Cli::try_parse_from(["hazel-setup", "--project", "..", "--toolchain", "vs2019"])
                .unwrap();
        let mut config = SetupConfig::default();
        cli.apply_to(&mut config);

        assert_eq!(config.project.root, Some(PathBuf::from("..")));
        assert_eq!(config.generator.toolchain, "vs2019");
    }

    #[test]
    fn apply_without_flags_keeps_config() {
        let cli = Cli::try_parse_from(["hazel-setup"]).unwrap();
        let mut config = SetupConfig::default();
        config.generator.toolchain = "xcode4".to_string();
        cli.apply_to(&mut config);

        assert_eq!(config.generator.toolchain, "xcode4");
        assert!(config.project.root.is_none());
    }
}
