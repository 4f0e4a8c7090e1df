//! Embedding model variants.
//!
//! Each variant implements [`EmbeddingComponent`](crate::component::EmbeddingComponent)
//! for one vendor:
//! - **[`JinaEmbedding`]** — Jina embeddings, local container or cloud API.
//! - **[`AllMiniLmEmbedding`]** — all-MiniLM-L6-v2 served locally via TorchServe;
//!   no cloud offering exists, so `cloud` deployment is rejected at construction.
//!
//! The code fragments emitted here follow the degrade-don't-crash contract:
//! the generated application catches the HTTP client's transport error,
//! logs it, and continues with an empty result. The generator itself never
//! swallows errors.

mod all_minilm;
mod jina;

pub use all_minilm::AllMiniLmEmbedding;
pub use jina::JinaEmbedding;
