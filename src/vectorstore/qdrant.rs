//! Qdrant vector store variant.

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

/// Qdrant, as a local container or Qdrant Cloud. The only built-in store
/// with native sparse vector support.
pub struct QdrantStore {
    config: ComponentConfig,
}

impl QdrantStore {
    pub fn new(config: ComponentConfig) -> Result<Self, GeneratorError> {
        Ok(Self { config })
    }
}

impl VectorStoreComponent for QdrantStore {
    fn config(&self) -> &ComponentConfig {
        &self.config
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn service_name(&self) -> &'static str {
        "qdrant-vectorstore"
    }

    fn docker_service(&self) -> Result<Option<ServiceSpec>, GeneratorError> {
        if self.config.deployment() != Deployment::Local {
            return Ok(None);
        }
        let definition = r#"qdrant-vectorstore:
  image: qdrant/qdrant:v1.12.5
  container_name: qdrant-vectorstore
  ports:
    - "6333:6333"
    - "6334:6334"
  expose:
    - 6333
    - 6334
    - 6335
  volumes:
    - ./qdrant_data:/qdrant/storage
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
                r#"QDRANT_URL="your-qdrant-cloud-url""#.to_string(),
                r#"QDRANT_API_KEY="your-qdrant-api-key""#.to_string(),
                r#"QDRANT_COLLECTION_NAME="rag-db""#.to_string(),
            ],
            Deployment::Local => vec![
                r#"QDRANT_URL="http://qdrant-vectorstore:6333""#.to_string(),
                r#"QDRANT_COLLECTION_NAME="rag-db""#.to_string(),
            ],
        }
    }

    fn requirements(&self) -> Vec<String> {
        vec!["qdrant-client".to_string(), "langchain-qdrant".to_string()]
    }

    fn imports(&self) -> Vec<String> {
        let mut imports = vec![
            "from typing import List, Dict, Any".to_string(),
            "from pydantic import BaseModel, Field".to_string(),
            "from config import Config".to_string(),
            "from .utils.embedder import Embedder".to_string(),
        ];
        imports.extend([
            "from qdrant_client import QdrantClient".to_string(),
            "from qdrant_client.http.models import Distance, VectorParams".to_string(),
            "from langchain_qdrant import QdrantVectorStore".to_string(),
        ]);
        imports
    }

    fn config_class(&self) -> String {
        match self.config.deployment() {
            Deployment::Cloud => r#"class VectorStoreConfig(BaseModel):
    qdrant_url: str = Field(
        default=Config.QDRANT_URL,
        description="URL for Qdrant cloud server."
    )
    qdrant_api_key: str = Field(
        default=Config.QDRANT_API_KEY,
        description="API key for Qdrant cloud."
    )
    collection_name: str = Field(
        default=Config.QDRANT_COLLECTION_NAME,
        description="Name of the collection in Qdrant."
    )"#
                .to_string(),
            Deployment::Local => r#"class VectorStoreConfig(BaseModel):
    qdrant_url: str = Field(
        default=Config.QDRANT_URL,
        description="URL for local Qdrant server."
    )
    collection_name: str = Field(
        default=Config.QDRANT_COLLECTION_NAME,
        description="Name of the collection in Qdrant."
    )"#
                .to_string(),
        }
    }

    fn init_logic(&self) -> String {
        let client = match self.config.deployment() {
            Deployment::Cloud => {
                r#"self.client = QdrantClient(
    url=config.qdrant_url,
    api_key=config.qdrant_api_key
)"#
            }
            Deployment::Local => "self.client = QdrantClient(url=config.qdrant_url)",
        };
        format!(
            r#"self.embeddings = Embedder()

{client}

self.collection_name = config.collection_name
self.initialize_collection()

self.vector_store = QdrantVectorStore(
    client=self.client,
    collection_name=self.collection_name,
    embedding=self.embeddings
)"#
        )
    }

    fn collection_init_logic(&self, inputs: &StoreCodegenInputs) -> String {
        if inputs.sparse_vectors {
            format!(
                r#"collections = [c.name for c in self.client.get_collections().collections]
if self.collection_name not in collections:
    # Dense and sparse slots for sparse/hybrid retrieval
    from qdrant_client.http.models import SparseVectorParams
    from qdrant_client import models

    self.client.create_collection(
        collection_name=self.collection_name,
        vectors_config={{
            "dense": VectorParams(
                size={dimension},
                distance=Distance.COSINE
            )
        }},
        sparse_vectors_config={{
            "sparse": SparseVectorParams(
                index=models.SparseIndexParams(on_disk=False)
            )
        }}
    )
    print(f"Collection '{{self.collection_name}}' created with dense and sparse vectors.")
else:
    print(f"Collection '{{self.collection_name}}' already exists.")"#,
                dimension = inputs.dimension
            )
        } else {
            format!(
                r#"collections = [c.name for c in self.client.get_collections().collections]
if self.collection_name not in collections:
    self.client.create_collection(
        collection_name=self.collection_name,
        vectors_config=VectorParams(
            size={dimension},
            distance=Distance.COSINE
        )
    )
    print(f"Collection '{{self.collection_name}}' created with dense vectors.")
else:
    print(f"Collection '{{self.collection_name}}' already exists.")"#,
                dimension = inputs.dimension
            )
        }
    }

    fn free_variables(&self) -> Vec<&'static str> {
        match self.config.deployment() {
            Deployment::Cloud => vec![
                "Config.QDRANT_URL",
                "Config.QDRANT_API_KEY",
                "Config.QDRANT_COLLECTION_NAME",
            ],
            Deployment::Local => {
                vec!["Config.QDRANT_URL", "Config.QDRANT_COLLECTION_NAME"]
            }
        }
    }
}
