//! # rag-scaffold
//!
//! Composition engine for generating RAG application skeletons from a small
//! set of component choices (vector store, embedding model, deployment mode,
//! chunking strategy, retrieval method).
//!
//! The crate turns a structured configuration into a self-consistent bundle
//! of generated-code fragments, Docker service definitions, `.env` lines,
//! and dependency lists — a [`GenerationContext`](context::GenerationContext)
//! — ready for substitution into an external templating layer. It performs
//! no file I/O and no interactive prompting; those live in the surrounding
//! tooling.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────────┐   ┌───────────────────┐
//! │ Config       │──▶│ VariantRegistry   │──▶│ Composition engine │
//! │ (prompt UI)  │   │ id → constructor  │   │ + compat resolver  │
//! └──────────────┘   └───────────────────┘   └─────────┬─────────┘
//!                                                      ▼
//!                                            GenerationContext
//!                                            (external renderer)
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use rag_scaffold::component::Deployment;
//! use rag_scaffold::config::{EmbeddingSelection, GeneratorConfig, VectorDbSelection};
//! use rag_scaffold::registry::VariantRegistry;
//!
//! let registry = VariantRegistry::builtin();
//! let config = GeneratorConfig {
//!     project_name: Some("my-rag-app".to_string()),
//!     vector_db: Some(VectorDbSelection {
//!         id: "qdrant".to_string(),
//!         provider: "Qdrant".to_string(),
//!         deployment: Deployment::Local,
//!     }),
//!     llm: None,
//!     embedding: Some(EmbeddingSelection {
//!         id: "jina".to_string(),
//!         model: "jina-embeddings-v2-base-en".to_string(),
//!         deployment: Deployment::Local,
//!     }),
//!     chunking_strategy: None,
//!     retrieval_method: Some("Hybrid Search".to_string()),
//! };
//! let ctx = rag_scaffold::compose::compose(&config, &registry).unwrap();
//! assert!(ctx.text("vectorstore.collection_init_logic").is_some());
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`component`] | Roles, capability contracts, per-variant configuration |
//! | [`config`] | User configuration record, loading, validation |
//! | [`context`] | The namespaced artifact map handed to the renderer |
//! | [`registry`] | Id → constructor tables, one per role |
//! | [`compat`] | Retrieval × store compatibility resolution |
//! | [`compose`] | The composition engine and public entry point |
//! | [`embedding`] | Jina and all-MiniLM-L6-v2 variants |
//! | [`vectorstore`] | Qdrant, Pinecone, and Chroma variants |
//! | [`retrieval`] | Dense, sparse, and hybrid variants |
//! | [`error`] | The generation error taxonomy |

pub mod compat;
pub mod component;
pub mod compose;
pub mod config;
pub mod context;
pub mod embedding;
pub mod error;
pub mod registry;
pub mod retrieval;
pub mod vectorstore;
