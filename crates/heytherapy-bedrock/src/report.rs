use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use futures::FutureExt;
use futures::future::BoxFuture;
use heytherapy_core::models::patient::PatientRecord;
use heytherapy_core::models::report::{ReportFailure, ReportOutcome};
use heytherapy_core::models::usage::TokenUsage;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::BedrockError;
use crate::models::ModelSelection;
use crate::prompt::{ReportRequest, SYSTEM_PROMPT};
use crate::tokens;

/// Sampling temperature for report generation. Kept low so repeated views
/// of the same record read consistently.
pub const TEMPERATURE: f32 = 0.15;

/// Upper bound on generated tokens per report.
pub const MAX_OUTPUT_TOKENS: i32 = 900;

/// A successfully generated clinical summary.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub transaction_id: Uuid,
    pub model_id: String,
    pub text: String,
    pub usage: TokenUsage,
}

/// Something that can turn a [`ReportRequest`] into summary text.
pub trait ReportGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        request: &'a ReportRequest,
    ) -> BoxFuture<'a, Result<GeneratedReport, BedrockError>>;
}

/// [`ReportGenerator`] backed by the Bedrock Converse API and the model
/// chosen at startup.
pub struct BedrockReportGenerator {
    client: Client,
    selection: ModelSelection,
}

impl BedrockReportGenerator {
    pub fn new(config: &aws_config::SdkConfig, selection: ModelSelection) -> Self {
        Self {
            client: Client::new(config),
            selection,
        }
    }

    pub fn selection(&self) -> &ModelSelection {
        &self.selection
    }
}

impl ReportGenerator for BedrockReportGenerator {
    fn generate<'a>(
        &'a self,
        request: &'a ReportRequest,
    ) -> BoxFuture<'a, Result<GeneratedReport, BedrockError>> {
        async move {
            let model_id = match &self.selection {
                ModelSelection::Resolved { model } => model.model_id.as_str(),
                ModelSelection::NoCandidate { preferences } => {
                    return Err(BedrockError::NoModel {
                        preferences: preferences.clone(),
                    });
                }
            };
            generate_report(&self.client, model_id, request).await
        }
        .boxed()
    }
}

/// Request a summary for the record's latest check-in.
///
/// Never fails: generation problems are logged and returned as
/// [`ReportOutcome::Unavailable`].
pub async fn request_report(
    generator: &dyn ReportGenerator,
    record: &PatientRecord,
) -> ReportOutcome {
    let request = ReportRequest::from_record(record);

    let result = generator.generate(&request).await.and_then(|report| {
        if report.text.trim().is_empty() {
            Err(BedrockError::EmptyResponse)
        } else {
            Ok(report)
        }
    });

    match result {
        Ok(report) => ReportOutcome::Generated {
            transaction_id: report.transaction_id,
            model_id: report.model_id,
            text: report.text,
            usage: report.usage,
        },
        Err(e) => {
            warn!(patient_id = %request.patient_id, error = %e, "report unavailable");
            ReportOutcome::unavailable(failure_reason(&e), format!("AI report unavailable: {e}"))
        }
    }
}

fn failure_reason(error: &BedrockError) -> ReportFailure {
    match error {
        BedrockError::NoModel { .. } => ReportFailure::NoModel,
        BedrockError::EmptyResponse => ReportFailure::EmptyResponse,
        BedrockError::Invocation(_)
        | BedrockError::ResponseParse(_)
        | BedrockError::Directory(_) => ReportFailure::Invocation,
    }
}

/// Invoke Bedrock for one clinical summary.
pub async fn generate_report(
    client: &Client,
    model_id: &str,
    request: &ReportRequest,
) -> Result<GeneratedReport, BedrockError> {
    let transaction_id = Uuid::new_v4();
    info!(
        transaction_id = %transaction_id,
        model = model_id,
        patient_id = %request.patient_id,
        "starting report generation"
    );

    let (text, usage) =
        invoke_converse(client, model_id, SYSTEM_PROMPT, &request.to_user_message()).await?;

    if text.trim().is_empty() {
        return Err(BedrockError::EmptyResponse);
    }

    info!(
        transaction_id = %transaction_id,
        input_tokens = usage.input_tokens,
        output_tokens = usage.output_tokens,
        "report generation complete"
    );

    Ok(GeneratedReport {
        transaction_id,
        model_id: model_id.to_string(),
        text,
        usage,
    })
}

/// Single-turn Converse call with the fixed decoding parameters.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<(String, TokenUsage), BedrockError> {
    let inference = InferenceConfiguration::builder()
        .temperature(TEMPERATURE)
        .max_tokens(MAX_OUTPUT_TOKENS)
        .build();

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .inference_config(inference)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let usage = tokens::usage_from_response(model_id, response.usage());

    Ok((text, usage))
}
