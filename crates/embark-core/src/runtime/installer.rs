//! Native framework installer seam

use super::exec::ToolError;
use std::path::Path;
use std::process::Command;

/// Outcome of a framework installer invocation. A nonzero exit code is not
/// an error here; the pipeline decides how to propagate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub exit_code: i32,
    /// The framework version that was installed
    pub version: String,
}

/// The native mobile-framework installer collaborator
pub trait FrameworkInstaller: Send + Sync {
    /// Create the base project `name` under `target_dir` at the given
    /// framework version.
    fn install(&self, name: &str, version: &str, target_dir: &Path)
        -> Result<InstallReport, ToolError>;
}

/// Invokes the `react-native` CLI, streaming its output
#[derive(Debug, Clone, Default)]
pub struct ReactNativeCli;

impl FrameworkInstaller for ReactNativeCli {
    fn install(
        &self,
        name: &str,
        version: &str,
        target_dir: &Path,
    ) -> Result<InstallReport, ToolError> {
        let status = Command::new("react-native")
            .args(["init", name, "--version", version])
            .current_dir(target_dir)
            .status()
            .map_err(|source| ToolError::Spawn {
                command: format!("react-native init {}", name),
                source,
            })?;

        Ok(InstallReport {
            exit_code: status.code().unwrap_or(-1),
            version: version.to_string(),
        })
    }
}
