//! Skeleton and template-set composition from resolved options
//!
//! Each optional feature contributes its template specs through one
//! declarative table, folded into a single ordered list. Insertion order is
//! write order.

use super::engine::{PropValue, Props};
use crate::config::Options;

/// A template to render paired with its target path (relative to the project root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    pub template: String,
    pub target: String,
}

/// A recursive directory copy from the boilerplate into the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySpec {
    /// Source directory relative to the boilerplate root
    pub source: String,
    /// Target directory relative to the project root (empty = the root itself)
    pub target: String,
    /// Skip files carrying the template suffix; they are rendered, not copied
    pub exclude_templates: bool,
}

/// Everything the pipeline materializes for one set of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub copies: Vec<CopySpec>,
    pub templates: Vec<TemplateSpec>,
}

/// Manifest overlay template, rendered and merged rather than written directly
pub const PACKAGE_TEMPLATE: &str = "package.json.tmpl";

struct FeatureGroup {
    enabled: fn(&Options) -> bool,
    specs: &'static [(&'static str, &'static str)],
}

const OPTIONAL_GROUPS: &[FeatureGroup] = &[
    FeatureGroup {
        enabled: |options| options.storybooks,
        specs: &[
            ("storybook/index.js.tmpl", "storybook/index.js"),
            (
                "storybook/storybook-registry.js.tmpl",
                "storybook/storybook-registry.js",
            ),
        ],
    },
    FeatureGroup {
        enabled: |options| options.linter,
        specs: &[
            (".prettierrc", ".prettierrc"),
            (".prettierignore", ".prettierignore"),
        ],
    },
];

fn core_templates(options: &Options) -> Vec<TemplateSpec> {
    let main_dir = options.layout.main_dir();
    let fixed = [
        ("index.js.tmpl", "index.js".to_string()),
        ("README.md", "README.md".to_string()),
        ("embark.json.tmpl", "embark/embark.json".to_string()),
        (".editorconfig", ".editorconfig".to_string()),
        (".babelrc", ".babelrc".to_string()),
        ("main/main.js.tmpl", format!("{}/main.js", main_dir)),
        (
            "main/root-component.js.tmpl",
            format!("{}/root-component.js", main_dir),
        ),
        (".env", ".env".to_string()),
    ];

    fixed
        .into_iter()
        .map(|(template, target)| TemplateSpec {
            template: template.to_string(),
            target,
        })
        .collect()
}

/// Decide which skeleton tree, optional file sets, and templates to materialize
pub fn compose(options: &Options) -> Composition {
    let mut copies = vec![CopySpec {
        source: options.layout.skeleton_dir().to_string(),
        target: String::new(),
        exclude_templates: true,
    }];

    if options.i18n {
        copies.push(CopySpec {
            source: "common/i18n".to_string(),
            target: format!("{}/i18n", options.layout.source_root()),
            exclude_templates: false,
        });
    }

    let mut templates = core_templates(options);
    for group in OPTIONAL_GROUPS {
        if (group.enabled)(options) {
            templates.extend(group.specs.iter().map(|(template, target)| TemplateSpec {
                template: template.to_string(),
                target: target.to_string(),
            }));
        }
    }

    Composition { copies, templates }
}

/// Build the property bag shared by every template in one run.
///
/// `pathToMainJs` is derived once from the layout so cross-references between
/// generated files stay consistent.
pub fn build_props(options: &Options, cli_version: &str, framework_version: &str) -> Props {
    let main_dir = options.layout.main_dir();
    let pairs: [(&str, PropValue); 11] = [
        ("name", options.name.as_str().into()),
        ("embarkVersion", cli_version.into()),
        ("reactNativeVersion", framework_version.into()),
        ("pathToMainJs", main_dir.into()),
        ("mainJs", format!("{}/main.js", main_dir).into()),
        ("directoryLayout", options.layout.as_str().into()),
        ("sourcePath", options.layout.source_root().into()),
        ("componentPath", options.layout.component_dir().into()),
        ("linter", options.linter.into()),
        ("storybooks", options.storybooks.into()),
        ("i18n", options.i18n.into()),
    ];

    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
