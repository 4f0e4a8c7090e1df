//! Chroma vector store variant.

use crate::component::{
    Capability, ComponentConfig, Deployment, ServiceSpec, StoreCodegenInputs,
    VectorStoreComponent,
};
use crate::error::GeneratorError;

const CAPABILITIES: &[Capability] = &[
    Capability::DockerService,
    Capability::Dependencies,
    Capability::CodeLogic,
];

/// Chroma, as a local container or a hosted instance. Dense vectors only;
/// sparse and hybrid retrieval against Chroma go through the resolver's
/// simulated or fallback paths.
pub struct ChromaStore {
    config: ComponentConfig,
}

impl ChromaStore {
    pub fn new(config: ComponentConfig) -> Result<Self, GeneratorError> {
        Ok(Self { config })
    }
}

impl VectorStoreComponent for ChromaStore {
    fn config(&self) -> &ComponentConfig {
        &self.config
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn service_name(&self) -> &'static str {
        "chroma-vectorstore"
    }

    fn docker_service(&self) -> Result<Option<ServiceSpec>, GeneratorError> {
        if self.config.deployment() != Deployment::Local {
            return Ok(None);
        }
        let definition = r#"chroma-vectorstore:
  image: chromadb/chroma:0.6.3
  container_name: chroma-vectorstore
  ports:
    - "8000:8000"
  volumes:
    - ./chroma_data:/chroma/chroma
  networks:
    - app-network"#
            .to_string();
        Ok(Some(ServiceSpec {
            service_name: self.service_name().to_string(),
            definition,
        }))
    }

    fn env_vars(&self) -> Vec<String> {
        match self.config.deployment() {
            Deployment::Cloud => vec![
                r#"CHROMA_URL="your-chroma-hosted-url""#.to_string(),
                r#"CHROMA_API_KEY="your-chroma-api-key""#.to_string(),
                r#"CHROMA_COLLECTION_NAME="rag-db""#.to_string(),
            ],
            Deployment::Local => vec![
                r#"CHROMA_URL="http://chroma-vectorstore:8000""#.to_string(),
                r#"CHROMA_COLLECTION_NAME="rag-db""#.to_string(),
            ],
        }
    }

    fn requirements(&self) -> Vec<String> {
        vec!["chromadb".to_string(), "langchain-chroma".to_string()]
    }

    fn imports(&self) -> Vec<String> {
        let mut imports = vec![
            "from typing import List, Dict, Any".to_string(),
            "from pydantic import BaseModel, Field".to_string(),
            "from config import Config".to_string(),
            "from .utils.embedder import Embedder".to_string(),
        ];
        imports.extend([
            "import chromadb".to_string(),
            "from langchain_chroma import Chroma".to_string(),
        ]);
        imports
    }

    fn config_class(&self) -> String {
        match self.config.deployment() {
            Deployment::Cloud => r#"class VectorStoreConfig(BaseModel):
    chroma_url: str = Field(
        default=Config.CHROMA_URL,
        description="URL for hosted Chroma server."
    )
    chroma_api_key: str = Field(
        default=Config.CHROMA_API_KEY,
        description="API key for hosted Chroma."
    )
    collection_name: str = Field(
        default=Config.CHROMA_COLLECTION_NAME,
        description="Name of the collection in Chroma."
    )"#
                .to_string(),
            Deployment::Local => r#"class VectorStoreConfig(BaseModel):
    chroma_url: str = Field(
        default=Config.CHROMA_URL,
        description="URL for local Chroma server."
    )
    collection_name: str = Field(
        default=Config.CHROMA_COLLECTION_NAME,
        description="Name of the collection in Chroma."
    )"#
                .to_string(),
        }
    }

    fn init_logic(&self) -> String {
        let client = match self.config.deployment() {
            Deployment::Cloud => {
                r#"self.client = chromadb.HttpClient(
    host=config.chroma_url,
    headers={"Authorization": f"Bearer {config.chroma_api_key}"}
)"#
            }
            Deployment::Local => "self.client = chromadb.HttpClient(host=config.chroma_url)",
        };
        format!(
            r#"self.embeddings = Embedder()

{client}

self.collection_name = config.collection_name
self.initialize_collection()

self.vector_store = Chroma(
    client=self.client,
    collection_name=self.collection_name,
    embedding_function=self.embeddings
)"#
        )
    }

    fn collection_init_logic(&self, inputs: &StoreCodegenInputs) -> String {
        // Chroma infers the dimension from the first upsert; the delegated
        // width is recorded in collection metadata for operator visibility.
        format!(
            r#"existing = [c.name for c in self.client.list_collections()]
if self.collection_name not in existing:
    self.client.create_collection(
        name=self.collection_name,
        metadata={{"hnsw:space": "cosine", "embedding_dimension": {dimension}}}
    )
    print(f"Collection '{{self.collection_name}}' created.")
else:
    print(f"Collection '{{self.collection_name}}' already exists.")"#,
            dimension = inputs.dimension
        )
    }

    fn free_variables(&self) -> Vec<&'static str> {
        match self.config.deployment() {
            Deployment::Cloud => vec![
                "Config.CHROMA_URL",
                "Config.CHROMA_API_KEY",
                "Config.CHROMA_COLLECTION_NAME",
            ],
            Deployment::Local => {
                vec!["Config.CHROMA_URL", "Config.CHROMA_COLLECTION_NAME"]
            }
        }
    }
}
