//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to define its identity: the command name
//! used for add-on installs, the default add-on, the pinned mobile framework
//! version, and the user-facing help strings.

use std::path::Path;

/// Configuration trait for a scaffolding CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (the CLI command, also used to invoke add-on installs)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Add-on package installed after scaffolding when the caller supplies none
    fn default_addon(&self) -> &'static str;

    /// Framework version passed to the native installer when the caller
    /// supplies no override
    fn framework_version(&self) -> &'static str;

    /// Environment variable name for overriding the boilerplate directory
    fn boilerplate_dir_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;
}
