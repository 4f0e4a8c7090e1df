//! Pinecone vector store variant.

use crate::component::{
    Capability, ComponentConfig, Deployment, Role, StoreCodegenInputs, VectorStoreComponent,
};
use crate::error::GeneratorError;

const CAPABILITIES: &[Capability] = &[Capability::Dependencies, Capability::CodeLogic];

/// Pinecone serverless index. Managed-service only: no Docker service is
/// ever emitted, and a request for `local` deployment is rejected at
/// construction even though the prompt layer is expected to have
/// constrained the choice upstream.
#[derive(Debug)]
pub struct PineconeStore {
    config: ComponentConfig,
}

impl PineconeStore {
    pub fn new(config: ComponentConfig) -> Result<Self, GeneratorError> {
        if config.deployment() == Deployment::Local {
            return Err(GeneratorError::UnsupportedDeployment {
                role: Role::VectorStore,
                id: config.id().to_string(),
                deployment: Deployment::Local,
            });
        }
        Ok(Self { config })
    }
}

impl VectorStoreComponent for PineconeStore {
    fn config(&self) -> &ComponentConfig {
        &self.config
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn service_name(&self) -> &'static str {
        "pinecone-vectorstore"
    }

    fn cloud_only(&self) -> bool {
        true
    }

    fn env_vars(&self) -> Vec<String> {
        vec![
            r#"PINECONE_API_KEY="your-pinecone-api-key""#.to_string(),
            r#"PINECONE_INDEX_NAME="rag-db""#.to_string(),
        ]
    }

    fn requirements(&self) -> Vec<String> {
        vec!["langchain-pinecone".to_string(), "pinecone-client".to_string()]
    }

    fn imports(&self) -> Vec<String> {
        let mut imports = vec![
            "from typing import List, Dict, Any".to_string(),
            "from pydantic import BaseModel, Field".to_string(),
            "from config import Config".to_string(),
            "from .utils.embedder import Embedder".to_string(),
        ];
        imports.extend([
            "from langchain_pinecone import PineconeVectorStore".to_string(),
            "from pinecone import Pinecone, ServerlessSpec".to_string(),
        ]);
        imports
    }

    fn config_class(&self) -> String {
        r#"class VectorStoreConfig(BaseModel):
    pinecone_api_key: str = Field(default=Config.PINECONE_API_KEY, description="Pinecone API key")
    index_name: str = Field(default=Config.PINECONE_INDEX_NAME, description="Name of the collection in Pinecone")"#
            .to_string()
    }

    fn init_logic(&self) -> String {
        r#"self.embeddings = Embedder()
self.pc = Pinecone(api_key=config.pinecone_api_key)
self.index_name = config.index_name

# Create collection if it doesn't exist
self.initialize_collection()

index = self.pc.Index(self.index_name)

self.vector_store = PineconeVectorStore(
    index=index,
    embedding=self.embeddings
)"#
        .to_string()
    }

    fn collection_init_logic(&self, inputs: &StoreCodegenInputs) -> String {
        // Pinecone serverless has no sparse slot concept; the resolver
        // never sets the sparse flag for this store.
        format!(
            r#"if self.index_name not in self.pc.list_indexes().names():
    self.pc.create_index(
        name=self.index_name,
        dimension={dimension},
        metric="cosine",
        spec=ServerlessSpec(cloud="aws", region="us-east-1"),
    )
    print(f"Collection '{{self.index_name}}' created successfully!")
else:
    print(f"Collection '{{self.index_name}}' already exists.")"#,
            dimension = inputs.dimension
        )
    }

    fn free_variables(&self) -> Vec<&'static str> {
        vec!["Config.PINECONE_API_KEY", "Config.PINECONE_INDEX_NAME"]
    }
}
