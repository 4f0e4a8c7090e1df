//! Error taxonomy for the generation core.
//!
//! Every error here is fatal to the current generation request; the core
//! never retries internally. Retry, if any, is the caller's decision (for
//! example re-prompting the user for a different component choice). This is
//! distinct from the error-handling policy the core *emits into generated
//! code*, which deliberately degrades rather than crashes because that code
//! runs unattended in the generated application.

use thiserror::Error;

use crate::component::{Deployment, Role};

/// Errors produced while composing a generation context.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Missing or malformed configuration keys. Carries the complete list
    /// of problems, not just the first one found.
    #[error("invalid configuration: missing required keys: {}", missing.join(", "))]
    InvalidConfiguration {
        /// All missing key paths, in declaration order.
        missing: Vec<String>,
    },

    /// An id has no registered constructor for its role.
    #[error("unknown {role} variant: \"{id}\"")]
    UnknownVariant { role: Role, id: String },

    /// A variant was asked to operate in a deployment mode it structurally
    /// cannot support (e.g. a local service for a cloud-only vendor).
    #[error("{role} variant \"{id}\" does not support {deployment} deployment")]
    UnsupportedDeployment {
        role: Role,
        id: String,
        deployment: Deployment,
    },

    /// A generated fragment assumes a `Config.*` variable that no emitted
    /// env var satisfies.
    #[error("code fragment references unsatisfied configuration variable \"{variable}\"")]
    UnboundFreeVariable { variable: String },

    /// A capability-method invocation failed; wraps the originating
    /// role/variant id. No partial context is ever returned.
    #[error("composition failed in {role} variant \"{id}\"")]
    CompositionFailure {
        role: Role,
        id: String,
        #[source]
        source: Box<GeneratorError>,
    },
}

impl GeneratorError {
    /// Wraps a capability failure with the role and variant id it came from.
    pub fn in_variant(self, role: Role, id: impl Into<String>) -> Self {
        GeneratorError::CompositionFailure {
            role,
            id: id.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_lists_all_keys() {
        let err = GeneratorError::InvalidConfiguration {
            missing: vec!["embedding".to_string(), "vector_db".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("embedding"));
        assert!(msg.contains("vector_db"));
    }

    #[test]
    fn test_unknown_variant_names_role_and_id() {
        let err = GeneratorError::UnknownVariant {
            role: Role::Embedding,
            id: "nonexistent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("embedding"));
        assert!(msg.contains("nonexistent"));
    }

    #[test]
    fn test_composition_failure_wraps_source() {
        let inner = GeneratorError::InvalidConfiguration {
            missing: vec!["model".to_string()],
        };
        let err = inner.in_variant(Role::Embedding, "jina");
        let msg = err.to_string();
        assert!(msg.contains("embedding"));
        assert!(msg.contains("jina"));
        match err {
            GeneratorError::CompositionFailure { source, .. } => match *source {
                GeneratorError::InvalidConfiguration { ref missing } => {
                    assert_eq!(missing, &["model".to_string()]);
                }
                other => panic!("unexpected source: {other}"),
            },
            other => panic!("unexpected error: {other}"),
        }
    }
}
