//! Jina embedding variant.

use crate::component::{
    Capability, ComponentConfig, Deployment, EmbeddingComponent, ServiceSpec,
};
use crate::error::GeneratorError;

const CAPABILITIES: &[Capability] = &[
    Capability::DockerService,
    Capability::Dependencies,
    Capability::VectorDimension,
    Capability::CodeLogic,
];

/// Jina embeddings, runnable as a local container or through the Jina
/// cloud API. Output width is fixed by the v2 base model family.
#[derive(Debug)]
pub struct JinaEmbedding {
    config: ComponentConfig,
    model: String,
}

impl JinaEmbedding {
    pub fn new(config: ComponentConfig) -> Result<Self, GeneratorError> {
        let model = config.require("model")?.to_string();
        Ok(Self { config, model })
    }
}

impl EmbeddingComponent for JinaEmbedding {
    fn config(&self) -> &ComponentConfig {
        &self.config
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }

    fn service_name(&self) -> &'static str {
        "jina-embedding"
    }

    fn docker_service(&self) -> Result<Option<ServiceSpec>, GeneratorError> {
        if self.config.deployment() != Deployment::Local {
            return Ok(None);
        }
        let definition = format!(
            r#"jina-embedding:
  image: jinaai/jina-embeddings:0.10.0
  container_name: jina-embedding
  ports:
    - "5656:5656"
  environment:
    - JINA_EMBEDDINGS_MODEL_NAME={model}
  networks:
    - app-network"#,
            model = self.model
        );
        Ok(Some(ServiceSpec {
            service_name: self.service_name().to_string(),
            definition,
        }))
    }

    fn env_vars(&self) -> Vec<String> {
        match self.config.deployment() {
            Deployment::Cloud => vec![r#"JINA_API_KEY="your-jina-api-key""#.to_string()],
            Deployment::Local => {
                vec![r#"JINA_EMBEDDING_URL="http://localhost:5656/embeddings""#.to_string()]
            }
        }
    }

    fn code_logic(&self) -> String {
        match self.config.deployment() {
            Deployment::Cloud => r#"# Jina Cloud API
headers = {
    "Authorization": f"Bearer {Config.JINA_API_KEY}",
    "Content-Type": "application/json"
}
try:
    response = requests.post(
        "https://api.jina.ai/v1/embeddings",
        json=data,
        headers=headers
    )
    response.raise_for_status()
    result = response.json()['data']
except requests.exceptions.RequestException as e:
    print(f"Error calling Jina API: {e}")
    result = []"#
                .to_string(),
            Deployment::Local => r#"# Jina local server
try:
    response = requests.post(
        Config.JINA_EMBEDDING_URL,
        json=data,
        headers={"Content-Type": "application/json"}
    )
    response.raise_for_status()
    result = response.json()['data']
except requests.exceptions.RequestException as e:
    print(f"Error calling Jina local embedding server: {e}")
    result = []"#
                .to_string(),
        }
    }

    fn free_variables(&self) -> Vec<&'static str> {
        match self.config.deployment() {
            Deployment::Cloud => vec!["Config.JINA_API_KEY"],
            Deployment::Local => vec!["Config.JINA_EMBEDDING_URL"],
        }
    }

    fn vector_dimension(&self) -> u32 {
        768
    }
}
