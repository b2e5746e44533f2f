//! Startup configuration, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `HEYTHERAPY_BIND` | `0.0.0.0:8080` |
//! | `HEYTHERAPY_AWS_REGION` | `us-east-1` |
//! | `HEYTHERAPY_AWS_ACCESS_KEY_ID` / `HEYTHERAPY_AWS_SECRET_ACCESS_KEY` | required, or a profile |
//! | `HEYTHERAPY_AWS_SESSION_TOKEN` | optional |
//! | `HEYTHERAPY_AWS_PROFILE` | required, or inline keys |
//! | `HEYTHERAPY_MODEL_PREFERENCES` | see [`DEFAULT_MODEL_PREFERENCES`] |
//!
//! Empty values count as unset.

use std::env;
use std::net::SocketAddr;

use heytherapy_bedrock::client::CredentialSource;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

pub const DEFAULT_REGION: &str = "us-east-1";

/// Model-ID fragments, most preferred first.
pub const DEFAULT_MODEL_PREFERENCES: &[&str] = &[
    "claude-sonnet-4-5",
    "claude-sonnet-4",
    "claude-haiku-4-5",
    "claude-3-5-haiku",
];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub region: String,
    pub credentials: CredentialSource,
    pub model_preferences: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("HEYTHERAPY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw
            .parse()
            .map_err(|e| eyre::eyre!("invalid HEYTHERAPY_BIND {bind_raw:?}: {e}"))?;

        let region = get("HEYTHERAPY_AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let credentials = match (
            get("HEYTHERAPY_AWS_ACCESS_KEY_ID"),
            get("HEYTHERAPY_AWS_SECRET_ACCESS_KEY"),
            get("HEYTHERAPY_AWS_PROFILE"),
        ) {
            (Some(access_key_id), Some(secret_access_key), _) => CredentialSource::Inline {
                access_key_id,
                secret_access_key,
                session_token: get("HEYTHERAPY_AWS_SESSION_TOKEN"),
            },
            (Some(_), None, _) | (None, Some(_), _) => {
                return Err(eyre::eyre!(
                    "HEYTHERAPY_AWS_ACCESS_KEY_ID and HEYTHERAPY_AWS_SECRET_ACCESS_KEY must be set together"
                ));
            }
            (None, None, Some(profile_name)) => CredentialSource::Profile { profile_name },
            (None, None, None) => {
                return Err(eyre::eyre!(
                    "no Bedrock credential configured: set HEYTHERAPY_AWS_ACCESS_KEY_ID and \
                     HEYTHERAPY_AWS_SECRET_ACCESS_KEY, or HEYTHERAPY_AWS_PROFILE"
                ));
            }
        };

        let model_preferences = match get("HEYTHERAPY_MODEL_PREFERENCES") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_MODEL_PREFERENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Self {
            bind,
            region,
            credentials,
            model_preferences,
        })
    }
}
