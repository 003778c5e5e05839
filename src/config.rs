use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::classifier::Model;

const DEFAULT_SVM_ENDPOINT: &str = "http://127.0.0.1:5001/predict";
const DEFAULT_VGG_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Classification endpoints, resolved once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub svm_endpoint: String,
    pub vgg_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svm_endpoint: DEFAULT_SVM_ENDPOINT.into(),
            vgg_endpoint: DEFAULT_VGG_ENDPOINT.into(),
        }
    }
}

impl Config {
    /// Directory: ~/.config/genre-scope/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("genre-scope");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if file doesn't exist or is invalid.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn endpoint_for(&self, model: Model) -> &str {
        match model {
            Model::Svm => &self.svm_endpoint,
            Model::Vgg => &self.vgg_endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_services() {
        let config = Config::default();
        assert_eq!(config.endpoint_for(Model::Svm), DEFAULT_SVM_ENDPOINT);
        assert_eq!(config.endpoint_for(Model::Vgg), DEFAULT_VGG_ENDPOINT);
    }

    #[test]
    fn parses_well_formed_file() {
        let json = r#"{
            "svm_endpoint": "http://classify.example/svm",
            "vgg_endpoint": "http://classify.example/vgg"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.endpoint_for(Model::Svm), "http://classify.example/svm");
        assert_eq!(config.endpoint_for(Model::Vgg), "http://classify.example/vgg");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let config: Config = serde_json::from_str("not json").unwrap_or_default();
        assert_eq!(config.svm_endpoint, DEFAULT_SVM_ENDPOINT);
        assert_eq!(config.vgg_endpoint, DEFAULT_VGG_ENDPOINT);
    }
}
