//! Dense (plain similarity) retrieval variant.

use crate::component::{Capability, RetrievalComponent, SupportLevel};

const CAPABILITIES: &[Capability] = &[Capability::Dependencies, Capability::CodeLogic];

/// Dense vector retrieval. The baseline every store supports; also the
/// fallback path emitted when another method's pairing is unsupported.
#[derive(Debug)]
pub struct DenseRetrieval;

impl RetrievalComponent for DenseRetrieval {
    fn id(&self) -> &'static str {
        "dense"
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn support_for(&self, _store_id: &str) -> SupportLevel {
        SupportLevel::Supported
    }

    fn search_method(&self, _store_id: &str) -> &'static str {
        "similarity_search"
    }

    fn init_logic(&self, store_id: &str) -> String {
        if store_id == "qdrant" {
            r#"# Dense retrieval initialization for Qdrant
from langchain_qdrant import RetrievalMode

self.vector_store.retrieval_mode = RetrievalMode.DENSE"#
                .to_string()
        } else {
            r#"# Dense retrieval is the default mode for this vector store
pass"#
                .to_string()
        }
    }

    fn retrieve_logic(&self, _store_id: &str) -> String {
        r#"def retrieve(self, query: str, k: int = 5) -> list:
    """Retrieve documents using dense vector similarity search."""
    try:
        documents = self.vector_store.similarity_search(query, k=k)
        return documents
    except Exception as e:
        print(f"Error during dense retrieval: {e}")
        return []

def retrieve_with_score(self, query: str, k: int = 5) -> list:
    """Retrieve documents with similarity scores."""
    try:
        documents_with_scores = self.vector_store.similarity_search_with_score(query, k=k)
        return documents_with_scores
    except Exception as e:
        print(f"Error during dense retrieval with scores: {e}")
        return []"#
            .to_string()
    }
}
