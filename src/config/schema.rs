//! Configuration schema definitions.
//!
//! These structs map to the optional `setup.yml` file. Every field has a
//! default, and the defaults reproduce the fixed bootstrap sequence, so an
//! absent file and an empty file behave identically.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable the SDK installer exports with its install root.
pub const SDK_ENV_VAR: &str = "VULKAN_SDK";

/// Root configuration structure for setup.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Where the project root lives relative to the start directory
    pub project: ProjectConfig,

    /// Host tools the bootstrap needs before doing anything else
    pub requirements: Vec<RequirementConfig>,

    /// Graphics SDK probes
    pub sdk: SdkConfig,

    /// Large-file asset synchronization
    pub assets: AssetConfig,

    /// Build-file generator invocation
    pub generator: GeneratorConfig,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            requirements: default_requirements(),
            sdk: SdkConfig::default(),
            assets: AssetConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Project root location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Offset from the start directory to the project root
    pub root_offset: PathBuf,

    /// Absolute or start-relative root; takes precedence over `root_offset`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root_offset: PathBuf::from(".."),
            root: None,
        }
    }
}

/// A host tool the bootstrap depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequirementConfig {
    /// Display name
    pub name: String,

    /// Program and arguments that exit 0 when the tool is usable
    pub check: Vec<String>,

    /// Program and arguments that install the tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install: Option<Vec<String>>,

    /// Instructions shown when the tool is missing and cannot be installed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,
}

fn default_requirements() -> Vec<RequirementConfig> {
    vec![
        RequirementConfig {
            name: "git".to_string(),
            check: vec!["git".to_string(), "--version".to_string()],
            install: None,
            install_hint: Some("Install Git from https://git-scm.com/downloads".to_string()),
        },
        RequirementConfig {
            name: "git-lfs".to_string(),
            check: vec!["git".to_string(), "lfs".to_string(), "version".to_string()],
            install: None,
            install_hint: Some("Install Git LFS from https://git-lfs.com".to_string()),
        },
    ]
}

/// Graphics SDK probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdkConfig {
    /// Display name used in report lines
    pub name: String,

    /// Explicit SDK root; falls back to the `VULKAN_SDK` environment variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Version string the SDK root path must contain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_version: Option<String>,

    /// Debug library marker, relative to the project root
    pub debug_lib: PathBuf,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            name: "Vulkan SDK".to_string(),
            root: None,
            required_version: None,
            debug_lib: PathBuf::from("Hazel/vendor/VulkanSDK/Lib/shaderc_sharedd.lib"),
        }
    }
}

impl SdkConfig {
    /// Resolve the SDK root from config or the environment.
    ///
    /// Takes the lookup function as a parameter so tests do not need to
    /// modify the real environment. Empty values count as unset.
    pub fn resolve_root<F>(&self, env_fn: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        if let Some(root) = &self.root {
            return Some(root.clone());
        }
        env_fn(SDK_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    }
}

/// What to do when an external step exits unsuccessfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the bootstrap.
    #[default]
    Fatal,
    /// Warn and continue.
    Advisory,
}

/// Large-file asset pull settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    /// Large-file-store client
    pub program: String,

    /// Arguments selecting the pull operation
    pub args: Vec<String>,

    /// Failure handling
    pub on_failure: FailurePolicy,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            args: vec!["lfs".to_string(), "pull".to_string()],
            on_failure: FailurePolicy::Fatal,
        }
    }
}

/// Build-file generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Vendored generator executable, relative to the project root.
    /// The platform executable suffix is appended when missing.
    pub executable: PathBuf,

    /// Target toolchain passed as the only argument
    pub toolchain: String,

    /// Failure handling
    pub on_failure: FailurePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("vendor/premake5"),
            toolchain: "vs2022".to_string(),
            on_failure: FailurePolicy::Fatal,
        }
    }
}
