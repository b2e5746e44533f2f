use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Token counts and estimated cost for one model call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost_usd: f64,
}

/// Pricing per million tokens for a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl ModelPricing {
    pub fn usage(&self, input_tokens: u64, output_tokens: u64) -> TokenUsage {
        let input_cost = (input_tokens as f64 / 1_000_000.0) * self.input_per_million;
        let output_cost = (output_tokens as f64 / 1_000_000.0) * self.output_per_million;
        TokenUsage {
            input_tokens,
            output_tokens,
            cost_usd: input_cost + output_cost,
        }
    }
}
