//! Variant registry: stable string id → component constructor, per role.
//!
//! Three identically shaped tables map the identifiers produced by the
//! prompt layer to variant constructors. The registry is built once at
//! process start ([`VariantRegistry::builtin`]) and is read-only
//! afterwards — there is no dynamic registration at request time, so a
//! shared reference is safe across threads.
//!
//! The registry is passed into the composition engine by reference
//! (constructor injection); tests build reduced registries with
//! [`VariantRegistry::empty`] and register only the variants (or test
//! doubles) they need.

use std::collections::BTreeMap;

use crate::component::{
    ComponentConfig, EmbeddingComponent, RetrievalComponent, Role, VectorStoreComponent,
};
use crate::embedding::{AllMiniLmEmbedding, JinaEmbedding};
use crate::error::GeneratorError;
use crate::retrieval::{DenseRetrieval, HybridRetrieval, SparseRetrieval};
use crate::vectorstore::{ChromaStore, PineconeStore, QdrantStore};

/// Constructor for an embedding variant.
pub type EmbeddingCtor =
    fn(ComponentConfig) -> Result<Box<dyn EmbeddingComponent>, GeneratorError>;

/// Constructor for a vector store variant.
pub type VectorStoreCtor =
    fn(ComponentConfig) -> Result<Box<dyn VectorStoreComponent>, GeneratorError>;

/// Constructor for a retrieval variant. Retrieval methods take no
/// per-instance configuration; they are parameterized by the store at
/// generation time.
pub type RetrievalCtor = fn() -> Box<dyn RetrievalComponent>;

/// Per-role constructor tables.
#[derive(Default)]
pub struct VariantRegistry {
    embeddings: BTreeMap<String, EmbeddingCtor>,
    vectorstores: BTreeMap<String, VectorStoreCtor>,
    retrievals: BTreeMap<String, RetrievalCtor>,
}

impl VariantRegistry {
    /// An empty registry, for tests with a reduced variant set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registry of all built-in variants.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();

        registry.register_embedding("jina", |config| {
            Ok(Box::new(JinaEmbedding::new(config)?))
        });
        registry.register_embedding("all_minilm_l6_v2", |config| {
            Ok(Box::new(AllMiniLmEmbedding::new(config)?))
        });

        registry.register_vectorstore("qdrant", |config| {
            Ok(Box::new(QdrantStore::new(config)?))
        });
        registry.register_vectorstore("pinecone", |config| {
            Ok(Box::new(PineconeStore::new(config)?))
        });
        registry.register_vectorstore("chroma", |config| {
            Ok(Box::new(ChromaStore::new(config)?))
        });

        registry.register_retrieval("dense", || Box::new(DenseRetrieval));
        registry.register_retrieval("sparse", || Box::new(SparseRetrieval));
        registry.register_retrieval("hybrid", || Box::new(HybridRetrieval));

        registry
    }

    pub fn register_embedding(&mut self, id: impl Into<String>, ctor: EmbeddingCtor) {
        self.embeddings.insert(id.into(), ctor);
    }

    pub fn register_vectorstore(&mut self, id: impl Into<String>, ctor: VectorStoreCtor) {
        self.vectorstores.insert(id.into(), ctor);
    }

    pub fn register_retrieval(&mut self, id: impl Into<String>, ctor: RetrievalCtor) {
        self.retrievals.insert(id.into(), ctor);
    }

    /// Instantiates the embedding variant registered under `id`.
    pub fn embedding(
        &self,
        id: &str,
        config: ComponentConfig,
    ) -> Result<Box<dyn EmbeddingComponent>, GeneratorError> {
        let ctor = self
            .embeddings
            .get(id)
            .ok_or_else(|| GeneratorError::UnknownVariant {
                role: Role::Embedding,
                id: id.to_string(),
            })?;
        ctor(config)
    }

    /// Instantiates the vector store variant registered under `id`.
    pub fn vectorstore(
        &self,
        id: &str,
        config: ComponentConfig,
    ) -> Result<Box<dyn VectorStoreComponent>, GeneratorError> {
        let ctor = self
            .vectorstores
            .get(id)
            .ok_or_else(|| GeneratorError::UnknownVariant {
                role: Role::VectorStore,
                id: id.to_string(),
            })?;
        ctor(config)
    }

    /// Instantiates the retrieval variant registered under `id`.
    pub fn retrieval(&self, id: &str) -> Result<Box<dyn RetrievalComponent>, GeneratorError> {
        let ctor = self
            .retrievals
            .get(id)
            .ok_or_else(|| GeneratorError::UnknownVariant {
                role: Role::Retrieval,
                id: id.to_string(),
            })?;
        Ok(ctor())
    }

    /// Registered ids for a role, in sorted order. Used by `raggen variants`.
    pub fn ids(&self, role: Role) -> Vec<&str> {
        match role {
            Role::Embedding => self.embeddings.keys().map(String::as_str).collect(),
            Role::VectorStore => self.vectorstores.keys().map(String::as_str).collect(),
            Role::Retrieval => self.retrievals.keys().map(String::as_str).collect(),
        }
    }
}
