//! all-MiniLM-L6-v2 embedding variant.

use crate::component::{
    Capability, ComponentConfig, Deployment, EmbeddingComponent, Role, ServiceSpec,
};
use crate::error::GeneratorError;

const CAPABILITIES: &[Capability] = &[
    Capability::DockerService,
    Capability::Dependencies,
    Capability::VectorDimension,
    Capability::CodeLogic,
];

/// all-MiniLM-L6-v2 served locally through TorchServe. There is no managed
/// cloud offering for this model, so `cloud` deployment is rejected when
/// the component is constructed.
#[derive(Debug)]
pub struct AllMiniLmEmbedding {
    config: ComponentConfig,
}

impl AllMiniLmEmbedding {
    pub fn new(config: ComponentConfig) -> Result<Self, GeneratorError> {
        if config.deployment() == Deployment::Cloud {
            return Err(GeneratorError::UnsupportedDeployment {
                role: Role::Embedding,
                id: config.id().to_string(),
                deployment: Deployment::Cloud,
            });
        }
        Ok(Self { config })
    }
}

impl EmbeddingComponent for AllMiniLmEmbedding {
    fn config(&self) -> &ComponentConfig {
        &self.config
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn service_name(&self) -> &'static str {
        "minilm-embedding"
    }

    fn docker_service(&self) -> Result<Option<ServiceSpec>, GeneratorError> {
        let definition = r#"minilm-embedding:
  build:
    context: .
    dockerfile: Dockerfile.minilm
  container_name: minilm-embedding
  ports:
    - "8080:8080"
  command: sh -c "torch-model-archiver --model-name all-MiniLM-L6-v2 --version 1.0 --handler ./embedding_handler.py --serialized-file ./model.pt --export-path /home/model-server/model-store && torchserve --start --model-store /home/model-server/model-store --models all-MiniLM-L6-v2=all-MiniLM-L6-v2.mar"
  networks:
    - app-network"#
            .to_string();
        Ok(Some(ServiceSpec {
            service_name: self.service_name().to_string(),
            definition,
        }))
    }

    fn env_vars(&self) -> Vec<String> {
        vec![r#"MINILM_EMBEDDING_URL="http://localhost:8080/predictions/all-MiniLM-L6-v2""#
            .to_string()]
    }

    fn requirements(&self) -> Vec<String> {
        vec!["sentence-transformers".to_string()]
    }

    fn code_logic(&self) -> String {
        r#"# all-MiniLM-L6-v2 local server
try:
    response = requests.post(
        Config.MINILM_EMBEDDING_URL,
        json=data,
        headers={"Content-Type": "application/json"}
    )
    response.raise_for_status()
    result = response.json()
except requests.exceptions.RequestException as e:
    print(f"Error calling MiniLM embedding server: {e}")
    result = []"#
            .to_string()
    }

    fn free_variables(&self) -> Vec<&'static str> {
        vec!["Config.MINILM_EMBEDDING_URL"]
    }

    fn vector_dimension(&self) -> u32 {
        384
    }
}
