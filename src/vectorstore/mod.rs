//! Vector store variants.
//!
//! Each variant implements [`VectorStoreComponent`](crate::component::VectorStoreComponent)
//! for one vendor:
//! - **[`QdrantStore`]** — local container or Qdrant Cloud; native sparse
//!   vector support.
//! - **[`PineconeStore`]** — managed serverless index; cloud-only, never
//!   emits a Docker service and rejects `local` deployment at construction.
//! - **[`ChromaStore`]** — local container or hosted Chroma; dense vectors
//!   only.
//!
//! Collection-init fragments are idempotent at the target system level:
//! they check for the named collection before creating it and emit a
//! log-only path when it already exists. The embedding dimension and the
//! sparse-slot requirement arrive through
//! [`StoreCodegenInputs`](crate::component::StoreCodegenInputs); stores
//! never inspect the retrieval variant.

mod chroma;
mod pinecone;
mod qdrant;

pub use chroma::ChromaStore;
pub use pinecone::PineconeStore;
pub use qdrant::QdrantStore;
