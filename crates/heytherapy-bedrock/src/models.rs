//! Model discovery and selection.
//!
//! The service does not hard-code a single model ID. At startup it reads
//! the Bedrock model directory once and picks the first entry of an
//! ordered preference list that is actually available:
//!
//! 1. `ListFoundationModels(provider="anthropic")` gives every Claude model
//!    with `ACTIVE` lifecycle status. Context-window variants (`:48k`,
//!    `:200k`) are skipped.
//! 2. `ListInferenceProfiles` gives the `us.` cross-region profiles. The
//!    Converse API needs a profile ID, so a model without one gets
//!    `us.{model_id}` constructed for it.
//! 3. [`resolve_model`] walks the preferences in order and takes the first
//!    model whose ID contains the preference fragment.
//!
//! When nothing matches, or the directory cannot be read, the result is
//! [`ModelSelection::NoCandidate`] and every report request reports the
//! model as unavailable instead of failing.

use std::collections::HashMap;

use aws_sdk_bedrock::types::{
    FoundationModelLifecycleStatus, InferenceProfileStatus, InferenceProfileType,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::BedrockError;

/// An invocable model (Bedrock inference profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatModel {
    /// Inference profile ID, e.g. `us.anthropic.claude-sonnet-4-20250514-v1:0`.
    pub model_id: String,
    pub name: String,
}

/// Outcome of resolving the preference list against the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelSelection {
    Resolved { model: ChatModel },
    NoCandidate { preferences: Vec<String> },
}

impl ModelSelection {
    pub fn model(&self) -> Option<&ChatModel> {
        match self {
            ModelSelection::Resolved { model } => Some(model),
            ModelSelection::NoCandidate { .. } => None,
        }
    }
}

/// Pick the first available model for the highest-ranked preference.
///
/// Each preference is a fragment matched against model IDs. Within one
/// preference, `available` order decides.
pub fn resolve_model(preferences: &[String], available: &[ChatModel]) -> ModelSelection {
    preferences
        .iter()
        .find_map(|fragment| {
            available
                .iter()
                .find(|m| m.model_id.contains(fragment.as_str()))
        })
        .map(|model| ModelSelection::Resolved {
            model: model.clone(),
        })
        .unwrap_or_else(|| ModelSelection::NoCandidate {
            preferences: preferences.to_vec(),
        })
}

/// Query the directory and resolve the preference list against it.
///
/// Directory failures are logged and reported as `NoCandidate`.
pub async fn select_model(config: &aws_config::SdkConfig, preferences: &[String]) -> ModelSelection {
    let available = match list_chat_models(config).await {
        Ok(models) => models,
        Err(e) => {
            warn!(error = %e, "model directory unavailable");
            Vec::new()
        }
    };

    let selection = resolve_model(preferences, &available);
    match &selection {
        ModelSelection::Resolved { model } => {
            info!(model_id = %model.model_id, "selected report model");
        }
        ModelSelection::NoCandidate { preferences } => {
            warn!(?preferences, available = available.len(), "no compatible report model");
        }
    }
    selection
}

/// A foundation model as listed by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundationEntry {
    pub model_id: String,
    pub name: String,
    pub active: bool,
}

/// A system-defined inference profile as listed by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    pub profile_id: String,
    pub name: String,
    pub active: bool,
}

/// List available Claude chat models, sorted by name.
pub async fn list_chat_models(
    config: &aws_config::SdkConfig,
) -> Result<Vec<ChatModel>, BedrockError> {
    let client = aws_sdk_bedrock::Client::new(config);

    let foundation = fetch_foundation_entries(&client).await?;
    let profiles = fetch_profile_entries(&client).await?;
    let models = chat_models_from_directory(&foundation, &profiles);

    info!(
        foundation = foundation.len(),
        profiles = profiles.len(),
        count = models.len(),
        "discovered chat models"
    );

    Ok(models)
}

/// Join directory listings into invocable models.
///
/// Only active Claude base models survive. Each one is addressed through
/// its active `us.` profile when the directory has one, otherwise through
/// a constructed `us.{model_id}`.
pub fn chat_models_from_directory(
    foundation: &[FoundationEntry],
    profiles: &[ProfileEntry],
) -> Vec<ChatModel> {
    let us_profiles: HashMap<&str, &ProfileEntry> = profiles
        .iter()
        .filter(|p| p.active)
        .filter_map(|p| {
            let bare = p.profile_id.strip_prefix("us.")?;
            bare.contains("anthropic.claude").then_some((bare, p))
        })
        .collect();

    let mut models: Vec<ChatModel> = foundation
        .iter()
        .filter(|m| m.active && m.model_id.contains("claude") && !is_context_variant(&m.model_id))
        .map(|m| match us_profiles.get(m.model_id.as_str()) {
            Some(profile) => ChatModel {
                model_id: profile.profile_id.clone(),
                name: profile.name.clone(),
            },
            None => ChatModel {
                model_id: format!("us.{}", m.model_id),
                name: m.name.clone(),
            },
        })
        .collect();

    models.sort_by(|a, b| a.name.cmp(&b.name));
    models
}

async fn fetch_foundation_entries(
    client: &aws_sdk_bedrock::Client,
) -> Result<Vec<FoundationEntry>, BedrockError> {
    let response = client
        .list_foundation_models()
        .by_provider("anthropic")
        .send()
        .await
        .map_err(|e| BedrockError::Directory(e.into_service_error().to_string()))?;

    Ok(response
        .model_summaries()
        .iter()
        .map(|m| FoundationEntry {
            model_id: m.model_id().to_string(),
            name: m.model_name().unwrap_or(m.model_id()).to_string(),
            active: m
                .model_lifecycle()
                .is_some_and(|lc| *lc.status() == FoundationModelLifecycleStatus::Active),
        })
        .collect())
}

async fn fetch_profile_entries(
    client: &aws_sdk_bedrock::Client,
) -> Result<Vec<ProfileEntry>, BedrockError> {
    let response = client
        .list_inference_profiles()
        .type_equals(InferenceProfileType::SystemDefined)
        .max_results(100)
        .send()
        .await
        .map_err(|e| BedrockError::Directory(e.into_service_error().to_string()))?;

    Ok(response
        .inference_profile_summaries()
        .iter()
        .map(|p| ProfileEntry {
            profile_id: p.inference_profile_id().to_string(),
            name: p.inference_profile_name().to_string(),
            active: *p.status() == InferenceProfileStatus::Active,
        })
        .collect())
}

/// `true` for IDs like `...-v1:0:200k`; the trailing `:0` revision alone
/// is not a variant.
fn is_context_variant(id: &str) -> bool {
    id.rsplit_once(':').is_some_and(|(_, suffix)| {
        suffix.chars().next().is_some_and(|c| c.is_ascii_digit()) && suffix != "0"
    })
}
