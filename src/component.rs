//! Component model: roles, capabilities, and per-variant configuration.
//!
//! Every pluggable building block in the generator is a *component variant*:
//! a concrete implementation of one role (embedding model, vector store,
//! retrieval method) for one vendor or strategy. Variants are constructed
//! from a [`ComponentConfig`] and are immutable afterwards.
//!
//! Optional behavior is modeled as *capabilities*. A variant declares the
//! set of [`Capability`] tags it satisfies, and the composition engine only
//! invokes the matching methods for declared capabilities. This keeps
//! capability membership explicit and testable per variant instead of
//! relying on trait-object downcasting.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              Component variant                │
//! │  ┌────────────┐ ┌────────────┐ ┌───────────┐  │
//! │  │ DockerSvc  │ │ Dependency │ │ CodeLogic │  │
//! │  │ (optional) │ │ (optional) │ │ (optional)│  │
//! │  └────────────┘ └────────────┘ └───────────┘  │
//! └──────────────────────┬────────────────────────┘
//!                        ▼
//!              compose() → GenerationContext
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::GeneratorError;

/// Where a component runs: a container on the user's machine, or a managed
/// cloud service reached over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Dockerized service on the local machine.
    Local,
    /// Managed cloud API; no local container is generated.
    Cloud,
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Local => write!(f, "local"),
            Deployment::Cloud => write!(f, "cloud"),
        }
    }
}

/// The three pluggable responsibilities a variant can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Embedding,
    VectorStore,
    Retrieval,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Embedding => write!(f, "embedding"),
            Role::VectorStore => write!(f, "vectorstore"),
            Role::Retrieval => write!(f, "retrieval"),
        }
    }
}

/// Optional behavior contracts a variant may satisfy.
///
/// The composition engine checks these tags before invoking the matching
/// trait methods, so a variant that never provides a Docker service (for
/// example a cloud-only managed index) simply omits
/// [`Capability::DockerService`] from its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Produces a container-service definition for local deployment.
    DockerService,
    /// Produces env-var declarations, package requirements, and imports.
    Dependencies,
    /// Produces a fixed embedding output width.
    VectorDimension,
    /// Produces source-code fragments for the generated application.
    CodeLogic,
}

/// Per-instance configuration record for one component.
///
/// Holds the stable variant `id`, the deployment mode, and variant-specific
/// keys (for example `model` for embedding variants). A variant reads only
/// the keys it declares required; a missing required key is an
/// [`GeneratorError::InvalidConfiguration`], never a silent fallback.
#[derive(Debug, Clone)]
pub struct ComponentConfig {
    id: String,
    deployment: Deployment,
    values: BTreeMap<String, String>,
}

impl ComponentConfig {
    pub fn new(id: impl Into<String>, deployment: Deployment) -> Self {
        Self {
            id: id.into(),
            deployment,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insertion of a variant-specific key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// The stable variant identifier, unique within its role.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn deployment(&self) -> Deployment {
        self.deployment
    }

    /// Looks up an optional variant-specific key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Looks up a key the variant declares as required.
    pub fn require(&self, key: &str) -> Result<&str, GeneratorError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| GeneratorError::InvalidConfiguration {
                missing: vec![key.to_string()],
            })
    }
}

/// A named Docker Compose service-mapping fragment.
///
/// `definition` is a YAML fragment whose single top-level key is
/// `service_name`; the downstream renderer splices it verbatim under the
/// compose file's `services:` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub service_name: String,
    pub definition: String,
}

/// Inputs the composition engine hands to a vector store's collection-init
/// codegen.
///
/// The dimension is delegated from the paired embedding component; stores
/// never self-declare one. `sparse_vectors` is the single flag derived from
/// the compatibility resolver — stores must not inspect the retrieval
/// variant directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCodegenInputs {
    pub dimension: u32,
    pub sparse_vectors: bool,
}

/// An embedding model variant.
///
/// Cloud deployments emit an HTTPS call with bearer-token auth and an
/// API-key env placeholder; local deployments emit a container spec and a
/// call to the local service endpoint. The emitted code catches the vendor
/// transport error class, logs it, and continues with an empty result —
/// the generated application degrades rather than crashes.
pub trait EmbeddingComponent: std::fmt::Debug + Send + Sync {
    fn config(&self) -> &ComponentConfig;

    /// Capability tags this variant satisfies.
    fn capabilities(&self) -> &'static [Capability];

    /// Docker service name used in the generated compose file.
    fn service_name(&self) -> &'static str;

    /// Container-service definition, or `None` when no local service is
    /// needed (cloud deployment).
    fn docker_service(&self) -> Result<Option<ServiceSpec>, GeneratorError> {
        Ok(None)
    }

    /// `KEY="value"` lines for the generated `.env` file.
    fn env_vars(&self) -> Vec<String>;

    /// Bare package identifiers (optionally `==`-pinned).
    fn requirements(&self) -> Vec<String> {
        Vec::new()
    }

    /// Import statements required by the generated embedding code.
    ///
    /// The base set is shared by all embedding variants; implementations
    /// extend it with vendor-specific imports.
    fn imports(&self) -> Vec<String> {
        vec![
            "import requests".to_string(),
            "from typing import List, Dict, Any".to_string(),
            "from config import Config".to_string(),
        ]
    }

    /// Source fragment implementing the embedding call in the generated app.
    fn code_logic(&self) -> String;

    /// `Config.*` names the code fragment assumes exist.
    ///
    /// The composition engine cross-checks these against the env vars
    /// actually emitted into the context.
    fn free_variables(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Fixed output width of this model's vectors (e.g. 384).
    fn vector_dimension(&self) -> u32;
}

/// A vector store variant.
pub trait VectorStoreComponent: Send + Sync {
    fn config(&self) -> &ComponentConfig;

    fn capabilities(&self) -> &'static [Capability];

    fn service_name(&self) -> &'static str;

    /// Whether this vendor exists only as a managed service. Cloud-only
    /// stores return an empty service unconditionally and reject `local`
    /// deployment at construction; the composition engine re-checks the
    /// flag against the configured deployment before any codegen runs.
    fn cloud_only(&self) -> bool {
        false
    }

    fn docker_service(&self) -> Result<Option<ServiceSpec>, GeneratorError> {
        Ok(None)
    }

    fn env_vars(&self) -> Vec<String>;

    fn requirements(&self) -> Vec<String>;

    fn imports(&self) -> Vec<String> {
        vec![
            "from typing import List, Dict, Any".to_string(),
            "from pydantic import BaseModel, Field".to_string(),
            "from config import Config".to_string(),
            "from .utils.embedder import Embedder".to_string(),
        ]
    }

    /// Pydantic configuration class definition for the generated app.
    fn config_class(&self) -> String;

    /// Client/collection initialization fragment.
    fn init_logic(&self) -> String;

    /// Collection-creation fragment. Must be idempotent at the target
    /// system level: check for the named collection before creating it and
    /// emit a log-only path when it already exists. Branches to create both
    /// dense and sparse slots when `inputs.sparse_vectors` is set.
    fn collection_init_logic(&self, inputs: &StoreCodegenInputs) -> String;

    /// `Config.*` names assumed by this store's fragments.
    fn free_variables(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// How well a retrieval variant pairs with a given vector store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportLevel {
    /// Native vendor support; vendor-specific init and retrieve code.
    Supported,
    /// No native support but a documented analog exists (e.g. MMR
    /// diversity search standing in for hybrid); the generated code falls
    /// back to plain similarity search if the analog itself fails.
    Simulated,
    /// No native or simulated path; dense fallback with a runtime-visible
    /// warning in the generated code.
    Unsupported,
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportLevel::Supported => write!(f, "supported"),
            SupportLevel::Simulated => write!(f, "simulated"),
            SupportLevel::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// A retrieval method variant.
///
/// Retrieval variants carry no deployment mode; they are parameterized at
/// generation time by the already-instantiated vector store they will run
/// against. Support is enumerated per store id, never inferred from
/// another pairing.
pub trait RetrievalComponent: std::fmt::Debug + Send + Sync {
    /// Stable retrieval-method identifier (e.g. `"hybrid"`).
    fn id(&self) -> &'static str;

    fn capabilities(&self) -> &'static [Capability];

    /// Declared support level for a specific store id.
    fn support_for(&self, store_id: &str) -> SupportLevel;

    /// Whether the store collection needs sparse vector slots when this
    /// method runs natively against it.
    fn requires_sparse_vectors(&self) -> bool {
        false
    }

    /// Search method name the generated code should call for this store.
    fn search_method(&self, store_id: &str) -> &'static str;

    /// Extra imports the generated code needs at this support level.
    fn imports(&self, level: SupportLevel) -> Vec<String> {
        let _ = level;
        Vec::new()
    }

    /// Extra package requirements at this support level.
    fn requirements(&self, level: SupportLevel) -> Vec<String> {
        let _ = level;
        Vec::new()
    }

    /// Vector-store configuration updates this method needs at this
    /// support level, if any. Fragments returned here must be backed by
    /// the imports and requirements emitted for the same level.
    fn config_updates(&self, level: SupportLevel) -> String {
        let _ = level;
        String::new()
    }

    /// Initialization fragment for the generated retriever.
    fn init_logic(&self, store_id: &str) -> String;

    /// The `retrieve()`/`retrieve_with_score()` method bodies.
    fn retrieve_logic(&self, store_id: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_config_require_present() {
        let config = ComponentConfig::new("jina", Deployment::Local).with("model", "jina-base");
        assert_eq!(config.require("model").unwrap(), "jina-base");
    }

    #[test]
    fn test_component_config_require_missing() {
        let config = ComponentConfig::new("jina", Deployment::Local);
        let err = config.require("model").unwrap_err();
        match err {
            GeneratorError::InvalidConfiguration { missing } => {
                assert_eq!(missing, vec!["model".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deployment_display() {
        assert_eq!(Deployment::Local.to_string(), "local");
        assert_eq!(Deployment::Cloud.to_string(), "cloud");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Embedding.to_string(), "embedding");
        assert_eq!(Role::VectorStore.to_string(), "vectorstore");
        assert_eq!(Role::Retrieval.to_string(), "retrieval");
    }
}
