//! SDK and debug-library probes.

use std::path::{Path, PathBuf};

use crate::config::{SdkConfig, SDK_ENV_VAR};
use crate::shell::resolve_against;

use super::version::extract_version;
use super::{CheckResult, SdkProbe};

/// Checks that the SDK is installed (and at the required version, if any).
#[derive(Debug, Clone)]
pub struct SdkInstalledProbe {
    label: String,
    root: Option<PathBuf>,
    required_version: Option<String>,
}

impl SdkInstalledProbe {
    /// Create a probe for an SDK expected at `root`.
    pub fn new(label: &str, root: Option<PathBuf>, required_version: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            root,
            required_version,
        }
    }

    fn advisory(&self) -> String {
        format!("{} not installed.", self.label)
    }
}

impl SdkProbe for SdkInstalledProbe {
    fn name(&self) -> &str {
        "sdk"
    }

    fn check(&self) -> CheckResult {
        let advisory = self.advisory();

        let Some(root) = &self.root else {
            return CheckResult::absent(
                self.name(),
                format!("{} is not set", SDK_ENV_VAR),
                &advisory,
            );
        };

        if !root.is_dir() {
            return CheckResult::absent(
                self.name(),
                format!("{} does not exist", root.display()),
                &advisory,
            );
        }

        let found = extract_version(root);

        if let Some(required) = &self.required_version {
            if !root.to_string_lossy().contains(required.as_str()) {
                return CheckResult::absent(
                    self.name(),
                    format!(
                        "found {} at {}, {} required",
                        found.as_deref().unwrap_or("unknown version"),
                        root.display(),
                        required
                    ),
                    &advisory,
                );
            }
        }

        let detail = match found {
            Some(version) => format!("{} {} located at {}", self.label, version, root.display()),
            None => format!("{} located at {}", self.label, root.display()),
        };
        CheckResult::present(self.name(), detail, &advisory)
    }
}

/// Checks that the SDK debug libraries are present.
#[derive(Debug, Clone)]
pub struct DebugLibsProbe {
    label: String,
    lib_path: PathBuf,
}

impl DebugLibsProbe {
    /// Create a probe for a debug library marker file.
    pub fn new(label: &str, lib_path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.to_string(),
            lib_path: lib_path.into(),
        }
    }
}

impl SdkProbe for DebugLibsProbe {
    fn name(&self) -> &str {
        "debug-libs"
    }

    fn check(&self) -> CheckResult {
        let advisory = format!("{} debug libs not found.", self.label);
        if self.lib_path.is_file() {
            let location = self.lib_path.parent().unwrap_or(&self.lib_path);
            CheckResult::present(
                self.name(),
                format!("{} debug libs located at {}", self.label, location.display()),
                &advisory,
            )
        } else {
            CheckResult::absent(
                self.name(),
                format!("checked {}", self.lib_path.display()),
                &advisory,
            )
        }
    }
}

/// Build both probes from config.
///
/// The SDK root comes from config or the environment via `env_fn`; the
/// debug library path is resolved against `project_root`.
pub fn probes_for<F>(sdk: &SdkConfig, project_root: &Path, env_fn: F) -> Vec<Box<dyn SdkProbe>>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let root = sdk.resolve_root(env_fn);
    vec![
        Box::new(SdkInstalledProbe::new(
            &sdk.name,
            root,
            sdk.required_version.clone(),
        )),
        Box::new(DebugLibsProbe::new(
            &sdk.name,
            resolve_against(project_root, &sdk.debug_lib),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn sdk_absent_when_root_unset() {
        let probe = SdkInstalledProbe::new("Vulkan SDK", None, None);
        let result = probe.check();
        assert!(!result.present);
        assert_eq!(result.advisory, "Vulkan SDK not installed.");
        assert!(result.detail.contains("VULKAN_SDK"));
    }

    #[test]
    fn sdk_absent_when_root_missing() {
        let probe = SdkInstalledProbe::new(
            "Vulkan SDK",
            Some(PathBuf::from("/nonexistent/VulkanSDK/1.3.250.1")),
            None,
        );
        assert!(!probe.check().present);
    }

    #[test]
    fn sdk_present_reports_version() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("VulkanSDK").join("1.3.250.1");
        fs::create_dir_all(&root).unwrap();

        let probe = SdkInstalledProbe::new("Vulkan SDK", Some(root), None);
        let result = probe.check();
        assert!(result.present);
        assert!(result.detail.contains("1.3.250.1"));
    }

    #[test]
    fn sdk_absent_on_version_mismatch() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("VulkanSDK").join("1.2.170.0");
        fs::create_dir_all(&root).unwrap();

        let probe = SdkInstalledProbe::new("Vulkan SDK", Some(root), Some("1.3.".to_string()));
        let result = probe.check();
        assert!(!result.present);
        assert!(result.detail.contains("1.2.170.0"));
        assert!(result.detail.contains("1.3."));
    }

    #[test]
    fn sdk_present_on_version_match() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("VulkanSDK").join("1.3.250.1");
        fs::create_dir_all(&root).unwrap();

        let probe =
            SdkInstalledProbe::new("Vulkan SDK", Some(root), Some("1.3.250".to_string()));
        assert!(probe.check().present);
    }

    #[test]
    fn debug_libs_absent_when_file_missing() {
        let temp = TempDir::new().unwrap();
        let probe = DebugLibsProbe::new("Vulkan SDK", temp.path().join("shaderc_sharedd.lib"));
        let result = probe.check();
        assert!(!result.present);
        assert_eq!(result.advisory, "Vulkan SDK debug libs not found.");
    }

    #[test]
    fn debug_libs_present_when_file_exists() {
        let temp = TempDir::new().unwrap();
        let lib_dir = temp.path().join("Lib");
        fs::create_dir_all(&lib_dir).unwrap();
        fs::write(lib_dir.join("shaderc_sharedd.lib"), b"").unwrap();

        let probe = DebugLibsProbe::new("Vulkan SDK", lib_dir.join("shaderc_sharedd.lib"));
        assert!(probe.check().present);
    }

    #[test]
    fn probes_for_builds_both_probes_in_order() {
        let temp = TempDir::new().unwrap();
        let probes = probes_for(&SdkConfig::default(), temp.path(), |_| {
            Err(std::env::VarError::NotPresent)
        });

        let names: Vec<_> = probes.iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["sdk", "debug-libs"]);
        assert!(probes.iter().all(|p| !p.check().present));
    }

    #[test]
    fn probes_for_reads_env_root() {
        let temp = TempDir::new().unwrap();
        let sdk_root = temp.path().join("1.3.250.1");
        fs::create_dir_all(&sdk_root).unwrap();
        let sdk_root_str = sdk_root.to_string_lossy().to_string();

        let probes = probes_for(&SdkConfig::default(), temp.path(), |var| {
            if var == SDK_ENV_VAR {
                Ok(sdk_root_str.clone())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        });

        assert!(probes[0].check().present);
        assert!(!probes[1].check().present);
    }
}
