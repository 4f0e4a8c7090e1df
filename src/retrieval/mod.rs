//! Retrieval method variants.
//!
//! Each variant implements [`RetrievalComponent`](crate::component::RetrievalComponent)
//! for one strategy:
//! - **[`DenseRetrieval`]** — plain similarity search; works everywhere.
//! - **[`SparseRetrieval`]** — BM25-style sparse vectors; Qdrant only.
//! - **[`HybridRetrieval`]** — dense + sparse; native on Qdrant, simulated
//!   via MMR on Pinecone and Chroma.
//!
//! Retrieval variants carry no deployment mode. Support for a store is
//! enumerated explicitly per id in `support_for` — adding a new store never
//! silently upgrades an existing method's support level.

mod dense;
mod hybrid;
mod sparse;

pub use dense::DenseRetrieval;
pub use hybrid::HybridRetrieval;
pub use sparse::SparseRetrieval;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{RetrievalComponent, SupportLevel};

    #[test]
    fn test_dense_supports_every_store() {
        let dense = DenseRetrieval;
        for store in ["qdrant", "pinecone", "chroma", "somethingelse"] {
            assert_eq!(dense.support_for(store), SupportLevel::Supported);
            assert_eq!(dense.search_method(store), "similarity_search");
        }
    }

    #[test]
    fn test_sparse_support_matrix() {
        let sparse = SparseRetrieval;
        assert_eq!(sparse.support_for("qdrant"), SupportLevel::Supported);
        assert_eq!(sparse.support_for("pinecone"), SupportLevel::Unsupported);
        assert_eq!(sparse.support_for("chroma"), SupportLevel::Unsupported);
        assert!(sparse.requires_sparse_vectors());
    }

    #[test]
    fn test_hybrid_support_matrix() {
        let hybrid = HybridRetrieval;
        assert_eq!(hybrid.support_for("qdrant"), SupportLevel::Supported);
        assert_eq!(hybrid.support_for("pinecone"), SupportLevel::Simulated);
        assert_eq!(hybrid.support_for("chroma"), SupportLevel::Simulated);
        assert_eq!(hybrid.support_for("unknown"), SupportLevel::Unsupported);
    }

    #[test]
    fn test_hybrid_search_method_per_store() {
        let hybrid = HybridRetrieval;
        assert_eq!(hybrid.search_method("qdrant"), "similarity_search");
        assert_eq!(
            hybrid.search_method("pinecone"),
            "max_marginal_relevance_search"
        );
        assert_eq!(
            hybrid.search_method("chroma"),
            "max_marginal_relevance_search"
        );
        assert_eq!(hybrid.search_method("unknown"), "similarity_search");
    }

    #[test]
    fn test_unsupported_pairings_emit_runtime_warning() {
        let sparse = SparseRetrieval;
        assert!(sparse.init_logic("pinecone").contains("Warning"));
        assert!(sparse.retrieve_logic("pinecone").contains("Warning"));
        let hybrid = HybridRetrieval;
        assert!(hybrid.init_logic("unknown").contains("Warning"));
        assert!(hybrid.retrieve_logic("unknown").contains("Warning"));
    }

    #[test]
    fn test_simulated_hybrid_falls_back_to_similarity_search() {
        let hybrid = HybridRetrieval;
        let code = hybrid.retrieve_logic("pinecone");
        assert!(code.contains("max_marginal_relevance_search"));
        assert!(code.contains("similarity_search"));
    }

    #[test]
    fn test_requirements_only_for_native_support() {
        let hybrid = HybridRetrieval;
        assert_eq!(
            hybrid.requirements(SupportLevel::Supported),
            vec!["fastembed"]
        );
        assert!(hybrid.requirements(SupportLevel::Simulated).is_empty());
        assert!(hybrid.requirements(SupportLevel::Unsupported).is_empty());
    }

    #[test]
    fn test_config_updates_only_for_native_support() {
        let sparse = SparseRetrieval;
        assert!(sparse
            .config_updates(SupportLevel::Supported)
            .contains("FastEmbedSparse"));
        assert!(sparse.config_updates(SupportLevel::Unsupported).is_empty());
        let hybrid = HybridRetrieval;
        assert!(hybrid
            .config_updates(SupportLevel::Supported)
            .contains("FastEmbedSparse"));
        assert!(hybrid.config_updates(SupportLevel::Simulated).is_empty());
        assert!(hybrid.config_updates(SupportLevel::Unsupported).is_empty());
    }

    #[test]
    fn test_support_is_deterministic() {
        let hybrid = HybridRetrieval;
        for _ in 0..3 {
            assert_eq!(hybrid.support_for("pinecone"), SupportLevel::Simulated);
            assert_eq!(
                hybrid.search_method("pinecone"),
                "max_marginal_relevance_search"
            );
        }
    }
}
