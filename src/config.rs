//! Generator configuration: the record produced by the upstream prompt
//! layer.
//!
//! The interactive prompt flow itself lives outside this crate; this module
//! only defines the record's shape, loads it from a TOML or JSON file, and
//! validates the top-level keys the composition engine depends on. All
//! missing keys are collected and reported in a single
//! [`GeneratorError::InvalidConfiguration`], never one at a time.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::component::Deployment;
use crate::error::GeneratorError;

/// Full user configuration for one generation request.
///
/// The selection fields are optional at the serde level so that validation
/// can report every missing key in one pass; [`GeneratorConfig::validate`]
/// enforces presence before composition starts.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub vector_db: Option<VectorDbSelection>,
    #[serde(default)]
    pub llm: Option<LlmSelection>,
    #[serde(default)]
    pub embedding: Option<EmbeddingSelection>,
    #[serde(default)]
    pub chunking_strategy: Option<String>,
    #[serde(default)]
    pub retrieval_method: Option<String>,
}

/// Vector database choice.
#[derive(Debug, Deserialize, Clone)]
pub struct VectorDbSelection {
    pub id: String,
    pub provider: String,
    pub deployment: Deployment,
}

/// Language model choice. The generator core only threads this through to
/// the context; no LLM-specific variants exist.
#[derive(Debug, Deserialize, Clone)]
pub struct LlmSelection {
    pub provider: String,
    pub deployment: Deployment,
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Embedding model choice.
#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingSelection {
    pub id: String,
    pub model: String,
    pub deployment: Deployment,
}

impl GeneratorConfig {
    /// Loads a configuration file, dispatching on the `.json` extension;
    /// everything else is parsed as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&raw)
                .with_context(|| format!("failed to parse TOML config: {}", path.display()))
        }
    }

    /// Checks that every top-level key the engine needs is present,
    /// collecting all missing keys before failing.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        self.selections().map(|_| ())
    }

    /// Validates and returns the three selections composition depends on.
    ///
    /// All missing keys are collected before failing, so a caller gets the
    /// complete problem list in one error.
    pub fn selections(
        &self,
    ) -> Result<(&EmbeddingSelection, &VectorDbSelection, &str), GeneratorError> {
        let mut missing = Vec::new();
        if self.embedding.is_none() {
            missing.push("embedding".to_string());
        }
        if self.vector_db.is_none() {
            missing.push("vector_db".to_string());
        }
        if self.retrieval_method.is_none() {
            missing.push("retrieval_method".to_string());
        }
        match (&self.embedding, &self.vector_db, &self.retrieval_method) {
            (Some(embedding), Some(vector_db), Some(retrieval)) if missing.is_empty() => {
                Ok((embedding, vector_db, retrieval.as_str()))
            }
            _ => Err(GeneratorError::InvalidConfiguration { missing }),
        }
    }
}

/// Normalizes a retrieval-method label from the prompt layer to a registry
/// id.
///
/// The upstream menu presents human labels ("Basic Vector Search",
/// "Hybrid Search"); bare registry ids are accepted as-is. Unrecognized
/// labels pass through lowercased so the registry reports them as unknown
/// variants.
pub fn normalize_retrieval_id(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    match lowered.as_str() {
        "basic vector search" | "dense search" | "dense" => "dense".to_string(),
        "sparse search" | "sparse" => "sparse".to_string(),
        "hybrid search" | "hybrid" => "hybrid".to_string(),
        _ => lowered,
    }
}
