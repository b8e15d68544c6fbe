//! Resolved install options and directory-layout variants

use std::fmt;

/// Directory-organization strategy for the generated source tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Feature-first: everything under `src/`, grouped by feature
    Feature,
    /// Function-first: everything under `App/`, grouped by role
    Function,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Feature => "feature",
            Layout::Function => "function",
        }
    }

    /// Boilerplate skeleton directory this layout is materialized from
    pub fn skeleton_dir(&self) -> &'static str {
        self.as_str()
    }

    /// Root of the generated source tree, relative to the project root
    pub fn source_root(&self) -> &'static str {
        match self {
            Layout::Feature => "src",
            Layout::Function => "App",
        }
    }

    /// Directory the entry screen and root component are rendered into
    pub fn main_dir(&self) -> &'static str {
        match self {
            Layout::Feature => "src/app",
            Layout::Function => "App/Containers",
        }
    }

    /// Directory reusable components live in
    pub fn component_dir(&self) -> &'static str {
        match self {
            Layout::Feature => "src/views",
            Layout::Function => "App/Components",
        }
    }

    pub fn parse(s: &str) -> Option<Layout> {
        match s {
            "feature" => Some(Layout::Feature),
            "function" => Some(Layout::Function),
            _ => None,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved user configuration for one install run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Target project name (also the directory created by the installer)
    pub name: String,
    pub layout: Layout,
    pub linter: bool,
    pub storybooks: bool,
    pub i18n: bool,
}
