//! JSON render configuration.
//!
//! ```json
//! {
//!   "render": { "show_centroids": true, "confidence": "p99", "samples": 64 },
//!   "methods": [{ "id": "gmm-full", "covariance": true, "weights": true }]
//! }
//! ```
//!
//! Every field is optional. `methods` extends the built-in descriptors
//! (`kmeans`, `em`, `hierarchical`); an entry with a built-in id replaces it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cluster::MethodDescriptor;
use crate::error::{Error, Result};
use crate::render::RenderOptions;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub render: RenderOptions,
    pub methods: Vec<MethodDescriptor>,
}

impl RenderConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] for malformed JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Look up a method descriptor by id, configured entries first.
    pub fn method(&self, id: &str) -> Option<MethodDescriptor> {
        self.methods
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .or_else(|| builtin_methods().into_iter().find(|m| m.id == id))
    }
}

/// Descriptors for the methods the clustering service ships with.
pub fn builtin_methods() -> Vec<MethodDescriptor> {
    vec![
        MethodDescriptor::kmeans(),
        MethodDescriptor::em(),
        MethodDescriptor::hierarchical(),
    ]
}

/// Read a [`RenderConfig`] from a JSON file.
///
/// # Errors
///
/// [`Error::Config`] if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&data).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ConfidenceLevel;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = RenderConfig::from_json("{}").unwrap();
        assert_eq!(cfg, RenderConfig::default());
        assert!(cfg.render.show_centroids);
        assert!(cfg.render.show_confidence_regions);
        assert_eq!(cfg.render.confidence, ConfidenceLevel::P95);
        assert_eq!(cfg.render.samples, 100);
    }

    #[test]
    fn partial_render_section() {
        let cfg = RenderConfig::from_json(
            r#"{"render": {"show_centroids": false, "confidence": "p90"}}"#,
        )
        .unwrap();
        assert!(!cfg.render.show_centroids);
        assert!(cfg.render.show_confidence_regions);
        assert_eq!(cfg.render.confidence, ConfidenceLevel::P90);
    }

    #[test]
    fn method_lookup() {
        let cfg = RenderConfig::from_json(
            r#"{"methods": [{"id": "gmm-full", "covariance": true}, {"id": "kmeans", "weights": true}]}"#,
        )
        .unwrap();
        assert!(cfg.method("gmm-full").unwrap().covariance);
        assert!(cfg.method("kmeans").unwrap().weights);
        assert_eq!(cfg.method("em"), Some(MethodDescriptor::em()));
        assert_eq!(cfg.method("spectral"), None);
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("clusterviz-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"render": {"samples": 16}}"#).unwrap();
        let cfg = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(cfg.render.samples, 16);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_config(Path::new("/nonexistent/clusterviz.json")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("/nonexistent/clusterviz.json"));
    }
}
