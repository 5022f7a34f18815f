/*
[INPUT]:  CLI flags, environment variables, optional interactive prompt
[OUTPUT]: Resolved API Credentials or a typed "missing" outcome
[POS]:    Configuration layer - per-invocation credential resolution
[UPDATE]: When adding credential sources or changing their precedence
*/

use std::io;

use binance_futures_adapter::Credentials;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};
use thiserror::Error;
use tracing::{error, info};

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    ApiKey,
    ApiSecret,
}

impl CredentialField {
    pub fn env_var(&self) -> &'static str {
        match self {
            CredentialField::ApiKey => API_KEY_ENV,
            CredentialField::ApiSecret => API_SECRET_ENV,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CredentialField::ApiKey => "Binance Testnet API Key",
            CredentialField::ApiSecret => "Binance Testnet API Secret",
        }
    }
}

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("{} is required (flag, {} or prompt)", .0.label(), .0.env_var())]
    Missing(CredentialField),

    #[error("failed to read {}: {source}", .field.label())]
    Prompt {
        field: CredentialField,
        #[source]
        source: io::Error,
    },
}

/// Last-resort source, asked only for fields still missing
pub trait CredentialPrompt {
    fn ask(&self, field: CredentialField) -> io::Result<String>;
}

/// Terminal prompt; the secret is read without echo
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl CredentialPrompt for TerminalPrompt {
    fn ask(&self, field: CredentialField) -> io::Result<String> {
        let theme = ColorfulTheme::default();
        let answer = match field {
            CredentialField::ApiKey => Input::<String>::with_theme(&theme)
                .with_prompt(field.label())
                .allow_empty(true)
                .interact_text(),
            CredentialField::ApiSecret => Password::with_theme(&theme)
                .with_prompt(field.label())
                .allow_empty_password(true)
                .interact(),
        };
        answer.map_err(io::Error::other)
    }
}

/// Values passed on the command line
#[derive(Debug, Default, Clone)]
pub struct CredentialFlags {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

/// Resolve each field from flag, then environment, then prompt.
///
/// Blank values count as absent at every step.
pub fn resolve_credentials(
    flags: &CredentialFlags,
    env: impl Fn(&str) -> Option<String>,
    prompt: Option<&dyn CredentialPrompt>,
) -> Result<Credentials, CredentialError> {
    let api_key = resolve_field(CredentialField::ApiKey, flags.api_key.as_deref(), &env, prompt)?;
    let api_secret = resolve_field(
        CredentialField::ApiSecret,
        flags.api_secret.as_deref(),
        &env,
        prompt,
    )?;

    info!("credentials resolved");
    Ok(Credentials::new(api_key, api_secret))
}

fn resolve_field(
    field: CredentialField,
    flag: Option<&str>,
    env: &impl Fn(&str) -> Option<String>,
    prompt: Option<&dyn CredentialPrompt>,
) -> Result<String, CredentialError> {
    if let Some(value) = non_blank(flag.map(str::to_string)) {
        return Ok(value);
    }
    if let Some(value) = non_blank(env(field.env_var())) {
        return Ok(value);
    }
    if let Some(prompt) = prompt {
        let answer = prompt
            .ask(field)
            .map_err(|source| CredentialError::Prompt { field, source })?;
        if let Some(value) = non_blank(Some(answer)) {
            return Ok(value);
        }
    }

    error!(field = field.env_var(), "API credentials missing");
    Err(CredentialError::Missing(field))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Process environment lookup
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
