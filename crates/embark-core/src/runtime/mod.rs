//! External collaborators and environment probes
//!
//! This module provides:
//! - Shell command execution with stdio control (`ProcessRunner`/`ShellRunner`)
//! - The native framework installer seam (`FrameworkInstaller`/`ReactNativeCli`)
//! - Progress reporting (`Reporter`/`ConsoleReporter`)
//! - Android SDK detection and framework version resolution

pub mod check;
pub mod exec;
pub mod installer;
pub mod report;
pub mod version;

pub use check::android_sdk_installed;
pub use exec::{ProcessRunner, ShellRunner, StdioMode, ToolError};
pub use installer::{FrameworkInstaller, InstallReport, ReactNativeCli};
pub use report::{ConsoleReporter, Reporter};
pub use version::{resolve_framework_version, VersionError};
