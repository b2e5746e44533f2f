use std::fmt;

/// Where Bedrock credentials come from. One of the two is required; there
/// is no silent fallback to the ambient provider chain.
#[derive(Clone)]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
}

impl CredentialSource {
    /// A log-safe description of the credential.
    pub fn hint(&self) -> String {
        match self {
            CredentialSource::Inline {
                access_key_id,
                session_token,
                ..
            } => {
                let kind = if session_token.is_some() {
                    "temporary"
                } else {
                    "inline"
                };
                format!("{kind} key {}", redact_access_key(access_key_id))
            }
            CredentialSource::Profile { profile_name } => format!("profile {profile_name}"),
        }
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hint())
    }
}

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_sdk_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(
                aws_sdk_bedrockruntime::config::Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token.clone(),
                    None,
                    "heytherapy-config",
                ),
            );
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
    }

    builder.load().await
}

pub fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
