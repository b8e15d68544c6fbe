//! Package manifest fragments and the install-time merge
//!
//! Two fragments participate: the *base* written to disk by the external
//! installer and the *overlay* rendered from our manifest template. The merge
//! never deletes a key unique to either side; on collision the overlay wins.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A package manifest: three distinguished map-valued sections plus an
/// arbitrary remainder of top-level keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestFragment {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub dependencies: Map<String, Value>,

    #[serde(
        default,
        rename = "devDependencies",
        skip_serializing_if = "Map::is_empty"
    )]
    pub dev_dependencies: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub scripts: Map<String, Value>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ManifestFragment {
    /// Parse a manifest from its on-disk JSON text. A distinguished key whose
    /// value is not a mapping fails here, before any merge runs.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize with stable two-space indentation and a trailing newline,
    /// suitable for writing back to the canonical manifest file.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

/// Reconcile the installer-produced base with our freshly rendered overlay.
///
/// Each distinguished section becomes the shallow key-union of both sides
/// with the overlay winning collisions. Every other overlay key overwrites
/// the same-named base key; base keys absent from the overlay survive
/// unchanged. Total for well-formed fragments.
pub fn merge(base: &ManifestFragment, overlay: &ManifestFragment) -> ManifestFragment {
    let mut merged = base.clone();

    merged
        .dependencies
        .extend(overlay.dependencies.iter().map(clone_entry));
    merged
        .dev_dependencies
        .extend(overlay.dev_dependencies.iter().map(clone_entry));
    merged.scripts.extend(overlay.scripts.iter().map(clone_entry));
    merged.rest.extend(overlay.rest.iter().map(clone_entry));

    merged
}

fn clone_entry((key, value): (&String, &Value)) -> (String, Value) {
    (key.clone(), value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fragment(value: serde_json::Value) -> ManifestFragment {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_distinguished_sections_union_with_overlay_winning() {
        let base = fragment(json!({
            "dependencies": { "react": "16.6.0", "react-native": "0.57.8" },
            "devDependencies": { "jest": "23.0.0" },
            "scripts": { "start": "node node_modules/react-native/local-cli/cli.js start" }
        }));
        let overlay = fragment(json!({
            "dependencies": { "react-native": "0.57.9", "ramda": "0.26.0" },
            "scripts": { "lint": "prettier-standard 'App/**/*.js'" }
        }));

        let merged = merge(&base, &overlay);

        // base keys absent from the overlay survive unchanged
        assert_eq!(merged.dependencies["react"], "16.6.0");
        assert_eq!(merged.dev_dependencies["jest"], "23.0.0");
        assert!(merged.scripts.contains_key("start"));
        // overlay keys all appear, overriding same-named base entries
        assert_eq!(merged.dependencies["react-native"], "0.57.9");
        assert_eq!(merged.dependencies["ramda"], "0.26.0");
        assert!(merged.scripts.contains_key("lint"));
    }

    #[test]
    fn test_rest_keys_overlay_overwrites_and_base_survives() {
        let base = fragment(json!({
            "name": "FromInstaller",
            "private": true,
            "jest": { "preset": "react-native" }
        }));
        let overlay = fragment(json!({
            "name": "Demo",
            "rnpm": { "assets": ["./assets/fonts"] }
        }));

        let merged = merge(&base, &overlay);

        assert_eq!(merged.rest["name"], "Demo");
        assert_eq!(merged.rest["private"], true);
        assert_eq!(merged.rest["rnpm"]["assets"][0], "./assets/fonts");
        assert_eq!(merged.rest["jest"]["preset"], "react-native");
    }

    #[test]
    fn test_merge_with_empty_overlay_is_identity() {
        let base = fragment(json!({
            "name": "Demo",
            "dependencies": { "react": "16.6.0" },
            "scripts": { "start": "react-native start" }
        }));

        assert_eq!(merge(&base, &ManifestFragment::default()), base);
    }

    #[test]
    fn test_malformed_distinguished_key_fails_at_parse() {
        assert!(ManifestFragment::from_json(r#"{ "dependencies": "react" }"#).is_err());
    }

    #[test]
    fn test_pretty_serialization_is_stable() {
        let manifest = fragment(json!({
            "name": "Demo",
            "dependencies": { "react": "16.6.0" }
        }));

        let first = manifest.to_json_pretty().unwrap();
        let second = ManifestFragment::from_json(&first)
            .unwrap()
            .to_json_pretty()
            .unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with('\n'));
        assert!(first.contains("  \"dependencies\""));
    }

    #[test]
    fn test_empty_sections_stay_out_of_the_output() {
        let manifest = fragment(json!({ "name": "Demo" }));
        let text = manifest.to_json_pretty().unwrap();
        assert!(!text.contains("dependencies"));
        assert!(!text.contains("scripts"));
    }
}
