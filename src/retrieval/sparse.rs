//! Sparse (keyword-weighted) retrieval variant.

use crate::component::{Capability, RetrievalComponent, SupportLevel};

const CAPABILITIES: &[Capability] = &[Capability::Dependencies, Capability::CodeLogic];

/// Sparse vector retrieval via BM25-style embeddings. Only Qdrant exposes
/// native sparse indexes; every other store falls back to dense search
/// with a runtime-visible warning in the generated code.
#[derive(Debug)]
pub struct SparseRetrieval;

impl RetrievalComponent for SparseRetrieval {
    fn id(&self) -> &'static str {
        "sparse"
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn support_for(&self, store_id: &str) -> SupportLevel {
        match store_id {
            "qdrant" => SupportLevel::Supported,
            _ => SupportLevel::Unsupported,
        }
    }

    fn requires_sparse_vectors(&self) -> bool {
        true
    }

    fn search_method(&self, _store_id: &str) -> &'static str {
        "similarity_search"
    }

    fn imports(&self, level: SupportLevel) -> Vec<String> {
        match level {
            SupportLevel::Supported => {
                vec!["from langchain_qdrant import FastEmbedSparse, RetrievalMode".to_string()]
            }
            _ => Vec::new(),
        }
    }

    fn requirements(&self, level: SupportLevel) -> Vec<String> {
        match level {
            // fastembed supplies the BM25 sparse embeddings
            SupportLevel::Supported => vec!["fastembed".to_string()],
            _ => Vec::new(),
        }
    }

    fn config_updates(&self, level: SupportLevel) -> String {
        match level {
            SupportLevel::Supported => r#"# Sparse retrieval configuration
sparse_embedding = FastEmbedSparse(model_name="Qdrant/bm25")"#
                .to_string(),
            _ => String::new(),
        }
    }

    fn init_logic(&self, store_id: &str) -> String {
        if store_id == "qdrant" {
            r#"# Sparse retrieval initialization for Qdrant
from langchain_qdrant import FastEmbedSparse, RetrievalMode

self.sparse_embeddings = FastEmbedSparse(model_name="Qdrant/bm25")

self.vector_store.sparse_embedding = self.sparse_embeddings
self.vector_store.retrieval_mode = RetrievalMode.SPARSE
self.vector_store.sparse_vector_name = "sparse""#
                .to_string()
        } else {
            r#"# Sparse retrieval is not supported by this vector store
print("Warning: Sparse retrieval not supported, using dense retrieval")"#
                .to_string()
        }
    }

    fn retrieve_logic(&self, store_id: &str) -> String {
        if store_id == "qdrant" {
            r#"def retrieve(self, query: str, k: int = 5) -> list:
    """Retrieve documents using sparse vector search."""
    try:
        documents = self.vector_store.similarity_search(query, k=k)
        return documents
    except Exception as e:
        print(f"Error during sparse retrieval: {e}")
        return []

def retrieve_with_score(self, query: str, k: int = 5) -> list:
    """Retrieve documents with similarity scores using sparse search."""
    try:
        documents_with_scores = self.vector_store.similarity_search_with_score(query, k=k)
        return documents_with_scores
    except Exception as e:
        print(f"Error during sparse retrieval with scores: {e}")
        return []"#
                .to_string()
        } else {
            r#"def retrieve(self, query: str, k: int = 5) -> list:
    """Retrieve documents using fallback dense search."""
    print("Warning: Sparse retrieval not supported by this vector store, using dense retrieval")
    try:
        documents = self.vector_store.similarity_search(query, k=k)
        return documents
    except Exception as e:
        print(f"Error during sparse retrieval fallback: {e}")
        return []

def retrieve_with_score(self, query: str, k: int = 5) -> list:
    """Retrieve documents with similarity scores using fallback dense search."""
    try:
        documents_with_scores = self.vector_store.similarity_search_with_score(query, k=k)
        return documents_with_scores
    except Exception as e:
        print(f"Error during sparse retrieval fallback with scores: {e}")
        return []"#
                .to_string()
        }
    }
}
