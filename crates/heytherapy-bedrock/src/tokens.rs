use heytherapy_core::models::usage::{ModelPricing, TokenUsage};

/// Token usage from a Converse response, priced when the model is known.
pub fn usage_from_response(
    model_id: &str,
    usage: Option<&aws_sdk_bedrockruntime::types::TokenUsage>,
) -> TokenUsage {
    let Some(usage) = usage else {
        return TokenUsage::default();
    };
    let input = usage.input_tokens.max(0) as u64;
    let output = usage.output_tokens.max(0) as u64;

    match get_pricing(model_id) {
        Some(pricing) => pricing.usage(input, output),
        None => TokenUsage {
            input_tokens: input,
            output_tokens: output,
            cost_usd: 0.0,
        },
    }
}

/// On-demand list prices in USD per million tokens, matched by model family.
pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        id if id.contains("claude-opus-4") => Some(ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        }),
        id if id.contains("claude-sonnet-4") => Some(ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        }),
        id if id.contains("claude-haiku-4") => Some(ModelPricing {
            input_per_million: 1.0,
            output_per_million: 5.0,
        }),
        id if id.contains("claude-3-5-haiku") => Some(ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        }),
        _ => None,
    }
}
