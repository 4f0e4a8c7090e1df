//! The merged artifact map handed to the downstream rendering layer.
//!
//! A [`GenerationContext`] is built once per generation request by the
//! composition engine and never mutated after it is handed off. Keys are
//! namespaced by role and artifact kind (`embedding.code_logic`,
//! `docker_service.vectorstore`, ...) so that artifacts from independently
//! authored variants can never overwrite each other; shared sequences such
//! as `requirements` and `env_vars` are concatenated in role order.
//!
//! The downstream layer treats every value as an opaque string (or ordered
//! string sequence); the conventions it relies on are documented per
//! artifact at the emit site, not here.

use serde::Serialize;
use std::collections::BTreeMap;

/// A single named artifact: either one opaque text block or an ordered
/// sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Artifact {
    Text(String),
    Lines(Vec<String>),
}

/// Namespaced artifact name → content, for one generation request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GenerationContext {
    artifacts: BTreeMap<String, Artifact>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a text artifact. Keys are namespaced by the engine, so a
    /// key is only ever written once per request.
    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.artifacts.insert(key.into(), Artifact::Text(value.into()));
    }

    /// Appends lines to a sequence artifact, creating it on first use.
    /// Duplicate lines are dropped, preserving first occurrence.
    pub fn append_lines<I>(&mut self, key: &str, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        let entry = self
            .artifacts
            .entry(key.to_string())
            .or_insert_with(|| Artifact::Lines(Vec::new()));
        if let Artifact::Lines(existing) = entry {
            for line in lines {
                if !existing.contains(&line) {
                    existing.push(line);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Artifact> {
        self.artifacts.get(key)
    }

    /// Text content of an artifact, if present and text-valued.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.artifacts.get(key) {
            Some(Artifact::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Line sequence of an artifact, if present and sequence-valued.
    pub fn lines(&self, key: &str) -> Option<&[String]> {
        match self.artifacts.get(key) {
            Some(Artifact::Lines(l)) => Some(l),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.artifacts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Iterates artifacts in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Artifact)> {
        self.artifacts.iter().map(|(k, v)| (k.as_str(), v))
    }
}
