//! Compatibility resolver for retrieval × vector store pairings.
//!
//! A pairing resolves to one of three outcomes:
//! - **Supported** — the retrieval variant declares native support for the
//!   store; vendor-specific init and retrieve code is emitted.
//! - **Simulated** — no native support but a documented analog exists
//!   (hybrid on a sparse-less store via MMR diversity search); the
//!   generated code falls back to plain similarity search if the analog
//!   itself fails at runtime.
//! - **Unsupported** — dense fallback, with a warning emitted *into the
//!   generated application* so the operator sees it at runtime.
//!
//! Resolution is a pure function of `(retrieval, store_id)`: it queries the
//! retrieval variant's explicitly enumerated support table and derives the
//! search method name and the sparse-slot flag. Identical inputs always
//! yield identical outcomes, which is what makes generation reproducible.

use crate::component::{RetrievalComponent, SupportLevel};

/// Resolved outcome for one retrieval × store pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingOutcome {
    pub level: SupportLevel,
    /// Search method name the generated code should call.
    pub search_method: &'static str,
    /// Whether the store's collection needs sparse vector slots. Only set
    /// when the store natively runs the method; simulated and fallback
    /// paths operate on dense vectors alone.
    pub sparse_vectors_needed: bool,
}

/// Resolves the pairing of a retrieval variant with a store id.
///
/// Support is evaluated per pair, never inferred transitively: a new store
/// id starts out [`SupportLevel::Unsupported`] for every existing retrieval
/// variant until that variant enumerates it.
pub fn resolve_pairing(retrieval: &dyn RetrievalComponent, store_id: &str) -> PairingOutcome {
    let level = retrieval.support_for(store_id);
    PairingOutcome {
        level,
        search_method: retrieval.search_method(store_id),
        sparse_vectors_needed: retrieval.requires_sparse_vectors()
            && level == SupportLevel::Supported,
    }
}
