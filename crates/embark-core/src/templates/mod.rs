//! Template rendering, composition, and manifest merging
//!
//! This module provides:
//! - A strict substitution engine over the boilerplate's template files
//! - The composer that turns `Options` into copy and template sets
//! - The package-manifest merge reconciling our overlay with the installer's

pub mod compose;
pub mod engine;
pub mod manifest;

use crate::product::ProductConfig;
use std::path::PathBuf;

pub use compose::{build_props, compose, Composition, CopySpec, TemplateSpec, PACKAGE_TEMPLATE};
pub use engine::{substitute, PropValue, Props, RenderError, TemplateEngine, TEMPLATE_SUFFIX};
pub use manifest::{merge, ManifestFragment};

/// Subdirectory of the boilerplate root holding the shared template files
pub const COMMON_DIR: &str = "common";

/// Locate the boilerplate root for a product: the product's env-var override
/// wins, otherwise a `boilerplate` directory next to the executable.
pub fn resolve_boilerplate_root<C: ProductConfig>(config: &C) -> PathBuf {
    if let Some(dir) = std::env::var_os(config.boilerplate_dir_env()) {
        return PathBuf::from(dir);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("boilerplate")))
        .unwrap_or_else(|| PathBuf::from("boilerplate"))
}
