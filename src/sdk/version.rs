//! SDK version extraction.
//!
//! SDK installers put the version in the install path
//! (`C:\VulkanSDK\1.3.250.1`, `~/vulkan/1.3.250.1/x86_64`), so the version is
//! read from the path rather than by running a tool.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+(?:\.\d+)?").unwrap());

/// Extract the first dotted version number from an SDK root path.
pub fn extract_version(path: &Path) -> Option<String> {
    let text = path.to_string_lossy();
    VERSION_PATTERN
        .find(&text)
        .map(|m| m.as_str().to_string())
}
