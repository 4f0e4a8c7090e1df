//! Composition engine: turns a validated configuration into a
//! [`GenerationContext`].
//!
//! [`compose`] is the public entry point the downstream rendering layer
//! calls. It resolves the selected variants through the injected registry,
//! queries the compatibility resolver, invokes capability methods in a
//! fixed order, and merges every artifact into one namespaced context:
//!
//! ```text
//! config ──▶ validate ──▶ resolve variants ──▶ resolve pairing
//!                                                   │
//!          dependencies → docker services → dimension → code logic
//!                                                   │
//!                            GenerationContext ◀────┘
//! ```
//!
//! Composition is all-or-nothing: any failure aborts the request and no
//! partial context escapes. The sparse-slot flag is computed from the
//! pairing outcome before any vector store method runs; no variant ever
//! observes another variant's output beyond that single flag.

use crate::compat::{resolve_pairing, PairingOutcome};
use crate::component::{
    Capability, ComponentConfig, Deployment, RetrievalComponent, Role, StoreCodegenInputs,
    VectorStoreComponent,
};
use crate::config::{normalize_retrieval_id, GeneratorConfig};
use crate::context::GenerationContext;
use crate::error::GeneratorError;
use crate::registry::VariantRegistry;

/// Composes the full generation context for one request.
///
/// # Errors
///
/// - [`GeneratorError::InvalidConfiguration`] — missing top-level keys,
///   reported all at once before any variant is instantiated.
/// - [`GeneratorError::UnknownVariant`] — an id with no registered
///   constructor.
/// - [`GeneratorError::UnsupportedDeployment`] — a structurally impossible
///   deployment request (e.g. local Pinecone).
/// - [`GeneratorError::CompositionFailure`] — a capability method failed;
///   wraps the originating role and variant id.
pub fn compose(
    config: &GeneratorConfig,
    registry: &VariantRegistry,
) -> Result<GenerationContext, GeneratorError> {
    let (embedding_sel, vector_db_sel, retrieval_label) = config.selections()?;

    let embedding_config = ComponentConfig::new(&embedding_sel.id, embedding_sel.deployment)
        .with("model", &embedding_sel.model);
    let embedding = registry
        .embedding(&embedding_sel.id, embedding_config)
        .map_err(|e| attribute(e, Role::Embedding, &embedding_sel.id))?;

    let store_config = ComponentConfig::new(&vector_db_sel.id, vector_db_sel.deployment)
        .with("provider", &vector_db_sel.provider);
    let store = registry
        .vectorstore(&vector_db_sel.id, store_config)
        .map_err(|e| attribute(e, Role::VectorStore, &vector_db_sel.id))?;

    // Constructors already reject impossible deployments; the engine
    // re-checks the structural constraint so a registered variant whose
    // constructor forgot to cannot reach codegen.
    if store.cloud_only() && store.config().deployment() == Deployment::Local {
        return Err(GeneratorError::UnsupportedDeployment {
            role: Role::VectorStore,
            id: store.config().id().to_string(),
            deployment: Deployment::Local,
        });
    }

    let retrieval_id = normalize_retrieval_id(retrieval_label);
    let retrieval = registry.retrieval(&retrieval_id)?;

    // Pairing outcome is fixed before any store method runs; the store
    // only ever sees the derived sparse flag.
    let outcome = resolve_pairing(retrieval.as_ref(), store.config().id());

    let mut ctx = GenerationContext::new();

    if let Some(name) = &config.project_name {
        ctx.set_text("project_name", name.clone());
    }
    if let Some(strategy) = &config.chunking_strategy {
        ctx.set_text("chunking_strategy", strategy.clone());
    }
    if let Some(llm) = &config.llm {
        ctx.set_text("llm.provider", llm.provider.clone());
        ctx.set_text("llm.deployment", llm.deployment.to_string());
        if let Some(endpoint) = &llm.endpoint {
            ctx.set_text("llm.endpoint", endpoint.clone());
        }
    }

    ctx.set_text("embedding.id", embedding.config().id());
    ctx.set_text("vectorstore.id", store.config().id());
    ctx.set_text("retrieval.id", retrieval.id());

    // 1. Dependencies.
    let mut env_keys: Vec<String> = Vec::new();
    if embedding.capabilities().contains(&Capability::Dependencies) {
        let env = embedding.env_vars();
        env_keys.extend(env.iter().filter_map(|l| env_key(l)));
        ctx.append_lines("embedding.env_vars", env.clone());
        ctx.append_lines("env_vars", env);
        ctx.append_lines("embedding.requirements", embedding.requirements());
        ctx.append_lines("requirements", embedding.requirements());
        ctx.append_lines("embedding.imports", embedding.imports());
        ctx.append_lines("imports", embedding.imports());
    }
    if store.capabilities().contains(&Capability::Dependencies) {
        let env = store.env_vars();
        env_keys.extend(env.iter().filter_map(|l| env_key(l)));
        ctx.append_lines("vectorstore.env_vars", env.clone());
        ctx.append_lines("env_vars", env);
        ctx.append_lines("vectorstore.requirements", store.requirements());
        ctx.append_lines("requirements", store.requirements());
        ctx.append_lines("vectorstore.imports", store.imports());
        ctx.append_lines("imports", store.imports());
    }
    if retrieval.capabilities().contains(&Capability::Dependencies) {
        ctx.append_lines("retrieval.requirements", retrieval.requirements(outcome.level));
        ctx.append_lines("requirements", retrieval.requirements(outcome.level));
        ctx.append_lines("retrieval.imports", retrieval.imports(outcome.level));
        ctx.append_lines("imports", retrieval.imports(outcome.level));
    }

    // 2. Docker services.
    if embedding.capabilities().contains(&Capability::DockerService) {
        let service = embedding
            .docker_service()
            .map_err(|e| attribute(e, Role::Embedding, embedding.config().id()))?;
        if let Some(spec) = service {
            ctx.set_text("docker_service.embedding", spec.definition);
        }
    }
    if store.capabilities().contains(&Capability::DockerService) {
        let service = store
            .docker_service()
            .map_err(|e| attribute(e, Role::VectorStore, store.config().id()))?;
        if let Some(spec) = service {
            ctx.set_text("docker_service.vectorstore", spec.definition);
        }
    }

    // 3. Vector dimension, delegated from the embedding component.
    let dimension = if embedding
        .capabilities()
        .contains(&Capability::VectorDimension)
    {
        embedding.vector_dimension()
    } else {
        return Err(attribute(
            GeneratorError::InvalidConfiguration {
                missing: vec!["vector_dimension".to_string()],
            },
            Role::Embedding,
            embedding.config().id(),
        ));
    };
    ctx.set_text("embedding.vector_dimension", dimension.to_string());

    // 4. Code logic, config class, init logic. The free-variable check
    //    guards fragments, so it runs only for variants that emit them.
    if embedding.capabilities().contains(&Capability::CodeLogic) {
        check_free_variables(embedding.free_variables(), &env_keys)
            .map_err(|e| attribute(e, Role::Embedding, embedding.config().id()))?;
        ctx.set_text("embedding.code_logic", embedding.code_logic());
    }

    if store.capabilities().contains(&Capability::CodeLogic) {
        check_free_variables(store.free_variables(), &env_keys)
            .map_err(|e| attribute(e, Role::VectorStore, store.config().id()))?;
        ctx.set_text("vectorstore.config_class", store.config_class());
        ctx.set_text("vectorstore.init_logic", store.init_logic());

        // 5. Collection init, given the single flag derived from the resolver.
        let inputs = StoreCodegenInputs {
            dimension,
            sparse_vectors: outcome.sparse_vectors_needed,
        };
        ctx.set_text(
            "vectorstore.collection_init_logic",
            store.collection_init_logic(&inputs),
        );
    }

    // 6. Retrieval fragments. The resolver verdict is recorded even when
    //    the variant emits no code of its own.
    ctx.set_text("retrieval.support_level", outcome.level.to_string());
    ctx.set_text("retrieval.search_method", outcome.search_method);
    if retrieval.capabilities().contains(&Capability::CodeLogic) {
        emit_retrieval(&mut ctx, retrieval.as_ref(), store.as_ref(), &outcome);
    }

    Ok(ctx)
}

fn emit_retrieval(
    ctx: &mut GenerationContext,
    retrieval: &dyn RetrievalComponent,
    store: &dyn VectorStoreComponent,
    outcome: &PairingOutcome,
) {
    let store_id = store.config().id();
    ctx.set_text("retrieval.init_logic", retrieval.init_logic(store_id));
    ctx.set_text("retrieval.retrieve_logic", retrieval.retrieve_logic(store_id));
    let updates = retrieval.config_updates(outcome.level);
    if !updates.is_empty() {
        ctx.set_text("retrieval.config_updates", updates);
    }
}

/// Extracts the key of a `KEY="value"` env line.
fn env_key(line: &str) -> Option<String> {
    line.split_once('=').map(|(key, _)| key.trim().to_string())
}

/// Checks every declared `Config.*` free variable against the env keys
/// actually emitted into the context.
fn check_free_variables(
    free_variables: Vec<&'static str>,
    env_keys: &[String],
) -> Result<(), GeneratorError> {
    for variable in free_variables {
        let key = variable.strip_prefix("Config.").unwrap_or(variable);
        if !env_keys.iter().any(|k| k == key) {
            return Err(GeneratorError::UnboundFreeVariable {
                variable: variable.to_string(),
            });
        }
    }
    Ok(())
}

/// Keeps `UnknownVariant` and `UnsupportedDeployment` as their own
/// taxonomy entries; everything else becomes a `CompositionFailure`
/// naming the role and variant.
fn attribute(err: GeneratorError, role: Role, id: &str) -> GeneratorError {
    match err {
        e @ GeneratorError::UnknownVariant { .. }
        | e @ GeneratorError::UnsupportedDeployment { .. } => e,
        other => other.in_variant(role, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{
        Capability, ComponentConfig, Deployment, EmbeddingComponent, ServiceSpec,
    };
    use crate::config::{EmbeddingSelection, VectorDbSelection};

    fn make_config(
        embedding_id: &str,
        embedding_deployment: Deployment,
        store_id: &str,
        store_deployment: Deployment,
        retrieval_method: &str,
    ) -> GeneratorConfig {
        GeneratorConfig {
            project_name: Some("my-rag-app".to_string()),
            vector_db: Some(VectorDbSelection {
                id: store_id.to_string(),
                provider: store_id.to_string(),
                deployment: store_deployment,
            }),
            llm: None,
            embedding: Some(EmbeddingSelection {
                id: embedding_id.to_string(),
                model: "jina-embeddings-v2-base-en".to_string(),
                deployment: embedding_deployment,
            }),
            chunking_strategy: Some("Fixed size".to_string()),
            retrieval_method: Some(retrieval_method.to_string()),
        }
    }

    #[test]
    fn test_jina_qdrant_hybrid_round_trip() {
        let registry = VariantRegistry::builtin();
        let config = make_config(
            "jina",
            Deployment::Local,
            "qdrant",
            Deployment::Local,
            "Hybrid Search",
        );
        let ctx = compose(&config, &registry).unwrap();

        let collection_init = ctx.text("vectorstore.collection_init_logic").unwrap();
        assert!(collection_init.contains("\"dense\""));
        assert!(collection_init.contains("\"sparse\""));
        assert!(collection_init.contains("size=768"));

        assert_eq!(ctx.text("retrieval.support_level"), Some("supported"));
        let init = ctx.text("retrieval.init_logic").unwrap();
        assert!(init.contains("RetrievalMode.HYBRID"));
        assert!(!init.contains("Warning"));

        assert!(ctx.text("docker_service.embedding").is_some());
        assert!(ctx.text("docker_service.vectorstore").is_some());
        assert!(ctx
            .lines("requirements")
            .unwrap()
            .contains(&"fastembed".to_string()));
        assert!(ctx
            .text("retrieval.config_updates")
            .unwrap()
            .contains("FastEmbedSparse"));
    }

    #[test]
    fn test_pinecone_sparse_selects_unsupported_fallback() {
        let registry = VariantRegistry::builtin();
        let config = make_config(
            "jina",
            Deployment::Cloud,
            "pinecone",
            Deployment::Cloud,
            "Sparse Search",
        );
        let ctx = compose(&config, &registry).unwrap();

        assert_eq!(ctx.text("retrieval.support_level"), Some("unsupported"));
        assert_eq!(ctx.text("retrieval.search_method"), Some("similarity_search"));
        assert!(ctx.text("retrieval.retrieve_logic").unwrap().contains("Warning"));
        assert!(ctx.text("retrieval.init_logic").unwrap().contains("Warning"));
        // No sparse slots and no fastembed for a fallback pairing.
        assert!(!ctx
            .text("vectorstore.collection_init_logic")
            .unwrap()
            .contains("SparseVectorParams"));
        assert!(!ctx
            .lines("requirements")
            .unwrap()
            .contains(&"fastembed".to_string()));
        assert!(!ctx.contains("retrieval.config_updates"));
    }

    #[test]
    fn test_simulated_pairing_emits_no_config_updates() {
        let registry = VariantRegistry::builtin();
        let config = make_config(
            "jina",
            Deployment::Local,
            "chroma",
            Deployment::Local,
            "Hybrid Search",
        );
        let ctx = compose(&config, &registry).unwrap();

        assert_eq!(ctx.text("retrieval.support_level"), Some("simulated"));
        // MMR stands in for hybrid here; no sparse embedding config may
        // leak in without its backing import and requirement.
        assert!(!ctx.contains("retrieval.config_updates"));
        assert!(!ctx
            .lines("imports")
            .unwrap()
            .iter()
            .any(|l| l.contains("FastEmbedSparse")));
    }

    #[test]
    fn test_unknown_embedding_id_yields_no_artifacts() {
        let registry = VariantRegistry::builtin();
        let config = make_config(
            "nonexistent",
            Deployment::Local,
            "qdrant",
            Deployment::Local,
            "Basic Vector Search",
        );
        let err = compose(&config, &registry).unwrap_err();
        match err {
            GeneratorError::UnknownVariant { role, id } => {
                assert_eq!(role, Role::Embedding);
                assert_eq!(id, "nonexistent");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_vector_db_listed_with_other_missing_keys() {
        let registry = VariantRegistry::builtin();
        let config = GeneratorConfig {
            project_name: Some("app".to_string()),
            vector_db: None,
            llm: None,
            embedding: None,
            chunking_strategy: None,
            retrieval_method: Some("Hybrid Search".to_string()),
        };
        let err = compose(&config, &registry).unwrap_err();
        match err {
            GeneratorError::InvalidConfiguration { missing } => {
                assert!(missing.contains(&"vector_db".to_string()));
                assert!(missing.contains(&"embedding".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_local_pinecone_is_unsupported_deployment() {
        let registry = VariantRegistry::builtin();
        let config = make_config(
            "jina",
            Deployment::Cloud,
            "pinecone",
            Deployment::Local,
            "Basic Vector Search",
        );
        let err = compose(&config, &registry).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::UnsupportedDeployment { .. }
        ));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let registry = VariantRegistry::builtin();
        let config = make_config(
            "all_minilm_l6_v2",
            Deployment::Local,
            "chroma",
            Deployment::Local,
            "Hybrid Search",
        );
        let first = serde_json::to_string(&compose(&config, &registry).unwrap()).unwrap();
        let second = serde_json::to_string(&compose(&config, &registry).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_minilm_chroma_dimension_delegation() {
        let registry = VariantRegistry::builtin();
        let config = make_config(
            "all_minilm_l6_v2",
            Deployment::Local,
            "chroma",
            Deployment::Local,
            "Basic Vector Search",
        );
        let ctx = compose(&config, &registry).unwrap();
        assert_eq!(ctx.text("embedding.vector_dimension"), Some("384"));
        assert!(ctx
            .text("vectorstore.collection_init_logic")
            .unwrap()
            .contains("\"embedding_dimension\": 384"));
    }

    #[test]
    fn test_requirements_concatenate_across_roles() {
        let registry = VariantRegistry::builtin();
        let config = make_config(
            "all_minilm_l6_v2",
            Deployment::Local,
            "qdrant",
            Deployment::Local,
            "Hybrid Search",
        );
        let ctx = compose(&config, &registry).unwrap();
        let requirements = ctx.lines("requirements").unwrap();
        assert!(requirements.contains(&"sentence-transformers".to_string()));
        assert!(requirements.contains(&"qdrant-client".to_string()));
        assert!(requirements.contains(&"fastembed".to_string()));
        // Per-role lists stay separate.
        assert_eq!(
            ctx.lines("embedding.requirements").unwrap(),
            &["sentence-transformers".to_string()]
        );
    }

    // An embedding double whose docker_service capability fails, for the
    // all-or-nothing property.
    #[derive(Debug)]
    struct FailingEmbedding {
        config: ComponentConfig,
    }

    impl EmbeddingComponent for FailingEmbedding {
        fn config(&self) -> &ComponentConfig {
            &self.config
        }

        fn capabilities(&self) -> &'static [Capability] {
            &[
                Capability::DockerService,
                Capability::Dependencies,
                Capability::VectorDimension,
                Capability::CodeLogic,
            ]
        }

        fn service_name(&self) -> &'static str {
            "failing-embedding"
        }

        fn docker_service(&self) -> Result<Option<ServiceSpec>, GeneratorError> {
            Err(GeneratorError::InvalidConfiguration {
                missing: vec!["image".to_string()],
            })
        }

        fn env_vars(&self) -> Vec<String> {
            vec![r#"FAILING_URL="http://localhost:1""#.to_string()]
        }

        fn code_logic(&self) -> String {
            "result = []".to_string()
        }

        fn vector_dimension(&self) -> u32 {
            8
        }
    }

    #[test]
    fn test_capability_failure_is_all_or_nothing() {
        let mut registry = VariantRegistry::empty();
        registry.register_embedding("failing", |config| {
            Ok(Box::new(FailingEmbedding { config }))
        });
        registry.register_vectorstore("qdrant", |config| {
            Ok(Box::new(crate::vectorstore::QdrantStore::new(config)?))
        });
        registry.register_retrieval("dense", || Box::new(crate::retrieval::DenseRetrieval));

        let config = make_config(
            "failing",
            Deployment::Local,
            "qdrant",
            Deployment::Local,
            "dense",
        );
        let err = compose(&config, &registry).unwrap_err();
        match err {
            GeneratorError::CompositionFailure { role, id, .. } => {
                assert_eq!(role, Role::Embedding);
                assert_eq!(id, "failing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // A double declaring a free variable no env var satisfies.
    #[derive(Debug)]
    struct UnboundEmbedding {
        config: ComponentConfig,
    }

    impl EmbeddingComponent for UnboundEmbedding {
        fn config(&self) -> &ComponentConfig {
            &self.config
        }

        fn capabilities(&self) -> &'static [Capability] {
            &[
                Capability::Dependencies,
                Capability::VectorDimension,
                Capability::CodeLogic,
            ]
        }

        fn service_name(&self) -> &'static str {
            "unbound-embedding"
        }

        fn env_vars(&self) -> Vec<String> {
            Vec::new()
        }

        fn code_logic(&self) -> String {
            "response = requests.post(Config.MISSING_URL, json=data)".to_string()
        }

        fn free_variables(&self) -> Vec<&'static str> {
            vec!["Config.MISSING_URL"]
        }

        fn vector_dimension(&self) -> u32 {
            8
        }
    }

    #[test]
    fn test_unbound_free_variable_fails_composition() {
        let mut registry = VariantRegistry::empty();
        registry.register_embedding("unbound", |config| {
            Ok(Box::new(UnboundEmbedding { config }))
        });
        registry.register_vectorstore("qdrant", |config| {
            Ok(Box::new(crate::vectorstore::QdrantStore::new(config)?))
        });
        registry.register_retrieval("dense", || Box::new(crate::retrieval::DenseRetrieval));

        let config = make_config(
            "unbound",
            Deployment::Local,
            "qdrant",
            Deployment::Local,
            "dense",
        );
        let err = compose(&config, &registry).unwrap_err();
        match err {
            GeneratorError::CompositionFailure { source, .. } => match *source {
                GeneratorError::UnboundFreeVariable { ref variable } => {
                    assert_eq!(variable, "Config.MISSING_URL");
                }
                ref other => panic!("unexpected source: {other}"),
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    // Doubles that supply dependencies and a dimension but declare no
    // code-generation capability. The engine must never call their
    // fragment methods.
    #[derive(Debug)]
    struct MetadataOnlyEmbedding {
        config: ComponentConfig,
    }

    impl EmbeddingComponent for MetadataOnlyEmbedding {
        fn config(&self) -> &ComponentConfig {
            &self.config
        }

        fn capabilities(&self) -> &'static [Capability] {
            &[Capability::Dependencies, Capability::VectorDimension]
        }

        fn service_name(&self) -> &'static str {
            "metadata-only-embedding"
        }

        fn env_vars(&self) -> Vec<String> {
            Vec::new()
        }

        fn code_logic(&self) -> String {
            unreachable!("code logic capability not declared")
        }

        fn vector_dimension(&self) -> u32 {
            16
        }
    }

    struct MetadataOnlyStore {
        config: ComponentConfig,
    }

    impl VectorStoreComponent for MetadataOnlyStore {
        fn config(&self) -> &ComponentConfig {
            &self.config
        }

        fn capabilities(&self) -> &'static [Capability] {
            &[Capability::Dependencies]
        }

        fn service_name(&self) -> &'static str {
            "metadata-only-store"
        }

        fn env_vars(&self) -> Vec<String> {
            Vec::new()
        }

        fn requirements(&self) -> Vec<String> {
            Vec::new()
        }

        fn config_class(&self) -> String {
            unreachable!("code logic capability not declared")
        }

        fn init_logic(&self) -> String {
            unreachable!("code logic capability not declared")
        }

        fn collection_init_logic(&self, _inputs: &StoreCodegenInputs) -> String {
            unreachable!("code logic capability not declared")
        }
    }

    #[test]
    fn test_code_logic_skipped_for_variants_without_the_capability() {
        let mut registry = VariantRegistry::empty();
        registry.register_embedding("metadata-only", |config| {
            Ok(Box::new(MetadataOnlyEmbedding { config }))
        });
        registry.register_vectorstore("plain", |config| {
            Ok(Box::new(MetadataOnlyStore { config }))
        });
        registry.register_retrieval("dense", || Box::new(crate::retrieval::DenseRetrieval));

        let config = make_config(
            "metadata-only",
            Deployment::Local,
            "plain",
            Deployment::Local,
            "dense",
        );
        let ctx = compose(&config, &registry).unwrap();

        assert!(!ctx.contains("embedding.code_logic"));
        assert!(!ctx.contains("vectorstore.config_class"));
        assert!(!ctx.contains("vectorstore.init_logic"));
        assert!(!ctx.contains("vectorstore.collection_init_logic"));
        // The resolver verdict and retrieval fragments are still emitted.
        assert_eq!(ctx.text("retrieval.support_level"), Some("supported"));
        assert!(ctx.contains("retrieval.retrieve_logic"));
    }

    // A cloud-only double whose constructor forgets to reject local
    // deployment.
    struct LaxCloudStore {
        config: ComponentConfig,
    }

    impl VectorStoreComponent for LaxCloudStore {
        fn config(&self) -> &ComponentConfig {
            &self.config
        }

        fn capabilities(&self) -> &'static [Capability] {
            &[Capability::Dependencies, Capability::CodeLogic]
        }

        fn service_name(&self) -> &'static str {
            "lax-cloud-store"
        }

        fn cloud_only(&self) -> bool {
            true
        }

        fn env_vars(&self) -> Vec<String> {
            Vec::new()
        }

        fn requirements(&self) -> Vec<String> {
            Vec::new()
        }

        fn config_class(&self) -> String {
            String::new()
        }

        fn init_logic(&self) -> String {
            String::new()
        }

        fn collection_init_logic(&self, _inputs: &StoreCodegenInputs) -> String {
            String::new()
        }
    }

    #[test]
    fn test_engine_rejects_local_deployment_of_cloud_only_store() {
        let mut registry = VariantRegistry::empty();
        registry.register_embedding("jina", |config| {
            Ok(Box::new(crate::embedding::JinaEmbedding::new(config)?))
        });
        registry.register_vectorstore("lax-cloud", |config| {
            Ok(Box::new(LaxCloudStore { config }))
        });
        registry.register_retrieval("dense", || Box::new(crate::retrieval::DenseRetrieval));

        let config = make_config(
            "jina",
            Deployment::Local,
            "lax-cloud",
            Deployment::Local,
            "dense",
        );
        let err = compose(&config, &registry).unwrap_err();
        match err {
            GeneratorError::UnsupportedDeployment {
                role,
                id,
                deployment,
            } => {
                assert_eq!(role, Role::VectorStore);
                assert_eq!(id, "lax-cloud");
                assert_eq!(deployment, Deployment::Local);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
