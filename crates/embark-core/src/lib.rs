//! Embark Core - Shared library for mobile project scaffolding
//!
//! This library drives the whole install run for the `embark` CLI: resolving
//! user options, materializing a boilerplate skeleton, rendering templates,
//! reconciling the package manifest the native installer produced with our
//! own, and sequencing the external tool invocations around all of that.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for option resolution,
//!   template rendering, composition, and manifest merging
//! - **Layer 2: Pipeline Orchestration** - `InstallPipeline` sequencing every
//!   step over narrow collaborator traits (installer, process runner,
//!   reporter, answer source)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive answer source
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use embark_core::{config, InstallPipeline, InstallRequest};
//!
//! let mut pipeline = InstallPipeline::new(
//!     MyProduct,
//!     "0.1.0",
//!     boilerplate_dir,
//!     std::env::current_dir()?,
//!     Box::new(ReactNativeCli),
//!     Box::new(ShellRunner),
//!     Box::new(ConsoleReporter),
//! );
//! let summary = pipeline.run(InstallRequest {
//!     name: "MyApp".into(),
//!     selection: config::Selection::Preset("max".into()),
//!     addon: None,
//!     framework_version: None,
//!     debug: false,
//!     skip_git: false,
//! }).await?;
//! ```

pub mod config;
pub mod install;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{AnswerSource, ConfigError, Layout, Options, Selection};
pub use install::{InstallError, InstallPipeline, InstallRequest, InstallSummary, Step};
pub use product::ProductConfig;
pub use runtime::{
    android_sdk_installed, ConsoleReporter, FrameworkInstaller, ProcessRunner, ReactNativeCli,
    Reporter, ShellRunner,
};
pub use templates::{
    compose, resolve_boilerplate_root, ManifestFragment, Props, TemplateEngine,
};

#[cfg(feature = "tui")]
pub use tui::CliclackPrompts;
