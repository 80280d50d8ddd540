//! Judge backends: a uniform completion capability over named models.

pub mod fake;
pub mod openai;

use crate::model::{Conversation, JudgeResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A capability for sending one conversation to a model and receiving a
/// single text completion. Sampling is pinned by the implementation
/// (temperature zero, one choice), so identical inputs are expected to give
/// consistent output modulo backend nondeterminism.
#[async_trait]
pub trait JudgeClient: Send + Sync + std::fmt::Debug {
    async fn complete(&self, conversation: &Conversation) -> anyhow::Result<JudgeResponse>;

    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> &str;
}

/// Fixed registry of backend identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Locally served small model behind an OpenAI-compatible endpoint.
    LocalSmall,
    /// Hosted mid-tier model, also used for extraction sub-tasks.
    HostedMini,
    /// Hosted flagship model, the default judge.
    HostedFull,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::LocalSmall => "local-small",
            Backend::HostedMini => "hosted-mini",
            Backend::HostedFull => "hosted-full",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps backend identities to injected client instances.
///
/// Strategies receive `Arc<dyn JudgeClient>` handles resolved here once at
/// startup; nothing downstream dispatches on model-name strings.
#[derive(Clone, Default)]
pub struct ModelRegistry {
    clients: HashMap<Backend, Arc<dyn JudgeClient>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, backend: Backend, client: Arc<dyn JudgeClient>) {
        self.clients.insert(backend, client);
    }

    pub fn with(mut self, backend: Backend, client: Arc<dyn JudgeClient>) -> Self {
        self.insert(backend, client);
        self
    }

    pub fn get(&self, backend: Backend) -> anyhow::Result<Arc<dyn JudgeClient>> {
        self.clients
            .get(&backend)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no client registered for backend '{}'", backend))
    }

    /// Registry with real chat clients for all three backends.
    pub fn from_config(cfg: &crate::config::BackendsConfig, api_key: &str) -> Self {
        Self::new()
            .with(
                Backend::LocalSmall,
                Arc::new(openai::OpenAiChatClient::local(
                    &cfg.local_base_url,
                    &cfg.local_model,
                )),
            )
            .with(
                Backend::HostedMini,
                Arc::new(openai::OpenAiChatClient::hosted(
                    &cfg.hosted_mini_model,
                    api_key,
                )),
            )
            .with(
                Backend::HostedFull,
                Arc::new(openai::OpenAiChatClient::hosted(
                    &cfg.hosted_full_model,
                    api_key,
                )),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fake::ScriptedClient;

    #[test]
    fn registry_resolves_registered_backends() {
        let registry = ModelRegistry::new()
            .with(Backend::HostedFull, Arc::new(ScriptedClient::repeating("ok")));
        assert!(registry.get(Backend::HostedFull).is_ok());
        let err = registry.get(Backend::LocalSmall).unwrap_err();
        assert!(err.to_string().contains("local-small"));
    }

    #[test]
    fn backend_names_are_stable() {
        assert_eq!(Backend::LocalSmall.as_str(), "local-small");
        assert_eq!(Backend::HostedMini.as_str(), "hosted-mini");
        assert_eq!(Backend::HostedFull.as_str(), "hosted-full");
        let parsed: Backend = serde_yaml::from_str("hosted-mini").unwrap();
        assert_eq!(parsed, Backend::HostedMini);
    }
}
