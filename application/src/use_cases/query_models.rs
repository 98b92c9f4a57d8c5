//! Query Models use case
//!
//! Sends one prompt to every configured backend at once and joins the answers.

use crate::config::DispatchConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use chrono::{SecondsFormat, Utc};
use duet_domain::{DispatchMetadata, DispatchResult, Model, ModelResponse};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur while querying the backends
#[derive(Error, Debug)]
pub enum QueryModelsError {
    #[error("No backends configured")]
    NoBackends,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Backend task failed: {0}")]
    TaskFailed(String),
}

/// Input for the QueryModels use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryModelsInput {
    /// The caller's prompt, sent verbatim as the user message
    pub prompt: String,
    /// Optional per-call replacement for the default system prompt
    pub system_prompt: Option<String>,
}

impl QueryModelsInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}

/// Use case for fanning a prompt out to every configured backend
///
/// The join is all-or-nothing: the first backend to fail fails the whole
/// call, the remaining backend tasks are aborted, and answers that already
/// arrived are discarded.
pub struct QueryModelsUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    config: Arc<DispatchConfig>,
}

impl<G: LlmGateway + 'static> Clone for QueryModelsUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            config: Arc::clone(&self.config),
        }
    }
}

impl<G: LlmGateway + 'static> QueryModelsUseCase<G> {
    pub fn new(gateway: Arc<G>, config: Arc<DispatchConfig>) -> Self {
        Self { gateway, config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        input: QueryModelsInput,
    ) -> Result<DispatchResult, QueryModelsError> {
        let backends = &self.config.backends;
        if backends.is_empty() {
            return Err(QueryModelsError::NoBackends);
        }

        let system_prompt = self
            .config
            .effective_system_prompt(input.system_prompt.as_deref())
            .to_string();

        info!("Querying {} models in parallel", backends.len());

        let mut join_set = JoinSet::new();

        for (index, backend) in backends.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let model = backend.model.clone();
            let system_prompt = system_prompt.clone();
            let prompt = input.prompt.clone();

            join_set.spawn(async move {
                let result = Self::query_model(&gateway, &model, &system_prompt, &prompt).await;
                (index, result)
            });
        }

        let mut contents: Vec<Option<String>> = vec![None; backends.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, Ok(content))) => {
                    debug!("Backend {} responded ({} chars)", index, content.len());
                    contents[index] = Some(content);
                }
                Ok((_, Err(e))) => {
                    // Dropping the JoinSet aborts the backends still in flight.
                    warn!("Model {} failed, abandoning fan-out: {}", e.model(), e);
                    return Err(e.into());
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    return Err(QueryModelsError::TaskFailed(e.to_string()));
                }
            }
        }

        let responses = backends
            .iter()
            .zip(contents)
            .map(|(backend, content)| {
                content
                    .map(|text| ModelResponse::new(backend.clone(), text))
                    .ok_or_else(|| {
                        QueryModelsError::TaskFailed(format!(
                            "no result for backend {}",
                            backend.name
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let metadata = DispatchMetadata::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            backends.iter().cloned().collect(),
            &system_prompt,
        );

        info!("All {} models responded", responses.len());

        Ok(DispatchResult::new(responses, metadata))
    }

    /// Query a single model
    async fn query_model(
        gateway: &G,
        model: &Model,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let session = gateway
            .create_session_with_system_prompt(model, system_prompt)
            .await?;

        session.send(prompt).await
    }
}
