//! Hybrid (dense + sparse) retrieval variant.

use crate::component::{Capability, RetrievalComponent, SupportLevel};

const CAPABILITIES: &[Capability] = &[Capability::Dependencies, Capability::CodeLogic];

/// Hybrid retrieval combining dense and sparse signals.
///
/// Qdrant runs it natively. Stores without sparse indexes (Pinecone,
/// Chroma) get a documented analog: maximum-marginal-relevance diversity
/// search, with a runtime fallback to plain similarity search if the MMR
/// call itself fails. Anything else falls back to dense with a warning.
#[derive(Debug)]
pub struct HybridRetrieval;

impl RetrievalComponent for HybridRetrieval {
    fn id(&self) -> &'static str {
        "hybrid"
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn support_for(&self, store_id: &str) -> SupportLevel {
        match store_id {
            "qdrant" => SupportLevel::Supported,
            "pinecone" | "chroma" => SupportLevel::Simulated,
            _ => SupportLevel::Unsupported,
        }
    }

    fn requires_sparse_vectors(&self) -> bool {
        true
    }

    fn search_method(&self, store_id: &str) -> &'static str {
        match self.support_for(store_id) {
            SupportLevel::Simulated => "max_marginal_relevance_search",
            _ => "similarity_search",
        }
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
            // fastembed supplies the sparse half of the hybrid pair
            SupportLevel::Supported => vec!["fastembed".to_string()],
            _ => Vec::new(),
        }
    }

    fn config_updates(&self, level: SupportLevel) -> String {
        match level {
            SupportLevel::Supported => r#"# Hybrid retrieval configuration
sparse_embedding = FastEmbedSparse(model_name="Qdrant/bm25")"#
                .to_string(),
            _ => String::new(),
        }
    }

    fn init_logic(&self, store_id: &str) -> String {
        match self.support_for(store_id) {
            SupportLevel::Supported => r#"# Hybrid retrieval initialization for Qdrant
from langchain_qdrant import FastEmbedSparse, RetrievalMode

self.sparse_embeddings = FastEmbedSparse(model_name="Qdrant/bm25")

self.vector_store.sparse_embedding = self.sparse_embeddings
self.vector_store.retrieval_mode = RetrievalMode.HYBRID
self.vector_store.vector_name = "dense"
self.vector_store.sparse_vector_name = "sparse""#
                .to_string(),
            SupportLevel::Simulated => {
                r#"# Hybrid retrieval simulated via MMR diversity search
# MMR provides diversity which mimics some hybrid benefits
pass"#
                    .to_string()
            }
            SupportLevel::Unsupported => r#"# Hybrid retrieval is not supported by this vector store
print("Warning: Hybrid retrieval not supported, using dense retrieval")"#
                .to_string(),
        }
    }

    fn retrieve_logic(&self, store_id: &str) -> String {
        match self.support_for(store_id) {
            SupportLevel::Supported => r#"def retrieve(self, query: str, k: int = 5) -> list:
    """Retrieve documents using hybrid search (dense + sparse)."""
    try:
        documents = self.vector_store.similarity_search(query, k=k)
        return documents
    except Exception as e:
        print(f"Error during hybrid retrieval: {e}")
        return []

def retrieve_with_score(self, query: str, k: int = 5) -> list:
    """Retrieve documents with similarity scores using hybrid search."""
    try:
        documents_with_scores = self.vector_store.similarity_search_with_score(query, k=k)
        return documents_with_scores
    except Exception as e:
        print(f"Error during hybrid retrieval with scores: {e}")
        return []"#
                .to_string(),
            SupportLevel::Simulated => {
                r#"def retrieve(self, query: str, k: int = 5) -> list:
    """Retrieve documents using MMR for diversity (hybrid-like behavior)."""
    try:
        documents = self.vector_store.max_marginal_relevance_search(query, k=k)
        return documents
    except Exception as e:
        print(f"Error during hybrid retrieval (MMR): {e}")
        # Fall back to plain similarity search
        try:
            documents = self.vector_store.similarity_search(query, k=k)
            return documents
        except Exception as fallback_e:
            print(f"Error during fallback retrieval: {fallback_e}")
            return []

def retrieve_with_score(self, query: str, k: int = 5) -> list:
    """Retrieve documents with similarity scores."""
    try:
        documents_with_scores = self.vector_store.similarity_search_with_score(query, k=k)
        return documents_with_scores
    except Exception as e:
        print(f"Error during hybrid retrieval with scores: {e}")
        return []"#
                    .to_string()
            }
            SupportLevel::Unsupported => r#"def retrieve(self, query: str, k: int = 5) -> list:
    """Retrieve documents using fallback dense search."""
    print("Warning: Hybrid retrieval not supported by this vector store, using dense retrieval")
    try:
        documents = self.vector_store.similarity_search(query, k=k)
        return documents
    except Exception as e:
        print(f"Error during hybrid retrieval fallback: {e}")
        return []

def retrieve_with_score(self, query: str, k: int = 5) -> list:
    """Retrieve documents with similarity scores using fallback dense search."""
    try:
        documents_with_scores = self.vector_store.similarity_search_with_score(query, k=k)
        return documents_with_scores
    except Exception as e:
        print(f"Error during hybrid retrieval fallback with scores: {e}")
        return []"#
                .to_string(),
        }
    }
}
