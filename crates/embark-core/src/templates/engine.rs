//! Strict template rendering with `{{key}}` substitution
//!
//! Rendering is deterministic: identical `(template, props)` always yields
//! identical output. A template referencing a key absent from the props fails
//! loudly instead of silently substituting an empty value, which would
//! corrupt generated source. Binary assets bypass substitution via `copy`.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Suffix marking a file as a template rather than a raw skeleton file
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Errors produced while rendering a template
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template '{template}' references undefined property '{key}'")]
    UndefinedProperty { template: String, key: String },

    #[error("template '{template}' has an unterminated '{{{{' placeholder")]
    UnterminatedPlaceholder { template: String },

    #[error("failed to read template '{template}': {source}")]
    Read {
        template: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A substitution value: templates only ever see strings and booleans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Str(String),
    Bool(bool),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Str(s) => write!(f, "{}", s),
            PropValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

/// Flat property bag shared by every template in one install run
pub type Props = BTreeMap<String, PropValue>;

/// Substitute `{{key}}` placeholders in `source` from `props`.
///
/// `template` is only used to label errors. Every `{{` opens a placeholder
/// and must be closed by `}}`; keys are trimmed before lookup.
pub fn substitute(template: &str, source: &str, props: &Props) -> Result<String, RenderError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| RenderError::UnterminatedPlaceholder {
                template: template.to_string(),
            })?;
        let key = after[..end].trim();
        let value = props.get(key).ok_or_else(|| RenderError::UndefinedProperty {
            template: template.to_string(),
            key: key.to_string(),
        })?;
        out.push_str(&value.to_string());
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Renders named templates from a directory of template files
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    root: PathBuf,
}

impl TemplateEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render a named template with the given property bag
    pub async fn render(&self, template: &str, props: &Props) -> Result<String, RenderError> {
        let path = self.root.join(template);
        let source = fs::read_to_string(&path)
            .await
            .map_err(|source| RenderError::Read {
                template: template.to_string(),
                source,
            })?;
        substitute(template, &source, props)
    }

    /// Copy a binary template verbatim, bypassing substitution
    pub async fn copy(&self, template: &str, dest: &Path) -> Result<(), RenderError> {
        let bytes = fs::read(self.root.join(template))
            .await
            .map_err(|source| RenderError::Read {
                template: template.to_string(),
                source,
            })?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| RenderError::Write {
                    path: dest.to_path_buf(),
                    source,
                })?;
        }
        fs::write(dest, &bytes)
            .await
            .map_err(|source| RenderError::Write {
                path: dest.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, PropValue)]) -> Props {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_substitutes_strings_and_bools() {
        let bag = props(&[
            ("name", PropValue::from("Demo")),
            ("linter", PropValue::from(true)),
        ]);
        let out = substitute("t", "app {{name}} lint={{linter}}", &bag).unwrap();
        assert_eq!(out, "app Demo lint=true");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let bag = props(&[("name", PropValue::from("Demo"))]);
        let first = substitute("t", "hello {{name}} and {{ name }}", &bag).unwrap();
        let second = substitute("t", "hello {{name}} and {{ name }}", &bag).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "hello Demo and Demo");
    }

    #[test]
    fn test_undefined_property_fails() {
        let bag = props(&[("name", PropValue::from("Demo"))]);
        let err = substitute("index.js.tmpl", "{{name}} {{missing}}", &bag).unwrap_err();
        assert!(matches!(
            err,
            RenderError::UndefinedProperty { template, key }
                if template == "index.js.tmpl" && key == "missing"
        ));
    }

    #[test]
    fn test_unterminated_placeholder_fails() {
        let bag = Props::new();
        let err = substitute("t", "oops {{name", &bag).unwrap_err();
        assert!(matches!(err, RenderError::UnterminatedPlaceholder { .. }));
    }

    #[test]
    fn test_text_without_placeholders_passes_through() {
        let out = substitute("t", "no placeholders here", &Props::new()).unwrap();
        assert_eq!(out, "no placeholders here");
    }

    #[tokio::test]
    async fn test_renders_from_template_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("greeting.tmpl"), "hi {{name}}\n").unwrap();

        let engine = TemplateEngine::new(dir.path());
        let bag = props(&[("name", PropValue::from("Demo"))]);
        let out = engine.render("greeting.tmpl", &bag).await.unwrap();
        assert_eq!(out, "hi Demo\n");
    }

    #[tokio::test]
    async fn test_missing_template_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let engine = TemplateEngine::new(dir.path());
        let err = engine.render("ghost.tmpl", &Props::new()).await.unwrap_err();
        assert!(matches!(err, RenderError::Read { template, .. } if template == "ghost.tmpl"));
    }

    #[tokio::test]
    async fn test_copy_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        // Placeholder-looking bytes must survive a copy untouched
        std::fs::write(dir.path().join("logo.png"), b"{{not a placeholder}}").unwrap();

        let engine = TemplateEngine::new(dir.path());
        let dest = dir.path().join("out/logo.png");
        engine.copy("logo.png", &dest).await.unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"{{not a placeholder}}");
    }
}
