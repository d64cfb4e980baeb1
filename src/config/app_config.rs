use std::{collections::BTreeSet, ops::RangeInclusive, time::Duration};

use thiserror::Error;

use crate::shared::domain::model::value_objects::identity_email::IdentityEmail;

pub const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Sessions last hours, never days.
pub const MAX_SESSION_TTL_SECONDS: u64 = 24 * 60 * 60;
pub const MAX_THIRD_PARTY_TOKEN_TTL_SECONDS: u64 = 24 * 60 * 60;
pub const MAX_CACHE_TTL_SECONDS: u64 = 60 * 60;

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub session_secret: String,
    pub bootstrap_admins: BTreeSet<IdentityEmail>,
    pub session_ttl: Duration,
    pub third_party_token_ttl: Duration,
    pub roster_cache_ttl: Duration,
    pub identity_cache_ttl: Duration,
    pub spreadsheet_id: String,
    pub roster_tab_name: String,
    pub google_userinfo_url: String,
    pub google_sheets_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let session_secret = read("SESSION_SECRET").ok_or(AppConfigError::Missing("SESSION_SECRET"))?;
        if session_secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(AppConfigError::Invalid {
                name: "SESSION_SECRET",
                reason: format!("must be at least {MIN_SESSION_SECRET_LENGTH} characters"),
            });
        }

        let bootstrap_admins = read("BOOTSTRAP_ADMIN_EMAILS")
            .map(|raw| parse_admin_list(&raw))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            port: parse_number(read("PORT"), "PORT", 8080)?,
            session_secret,
            bootstrap_admins,
            session_ttl: parse_seconds(
                read("SESSION_TTL_SECONDS"),
                "SESSION_TTL_SECONDS",
                8 * 60 * 60,
                1..=MAX_SESSION_TTL_SECONDS,
            )?,
            third_party_token_ttl: parse_seconds(
                read("THIRD_PARTY_TOKEN_TTL_SECONDS"),
                "THIRD_PARTY_TOKEN_TTL_SECONDS",
                60 * 60,
                1..=MAX_THIRD_PARTY_TOKEN_TTL_SECONDS,
            )?,
            roster_cache_ttl: parse_seconds(
                read("ROSTER_CACHE_TTL_SECONDS"),
                "ROSTER_CACHE_TTL_SECONDS",
                60,
                0..=MAX_CACHE_TTL_SECONDS,
            )?,
            identity_cache_ttl: parse_seconds(
                read("IDENTITY_CACHE_TTL_SECONDS"),
                "IDENTITY_CACHE_TTL_SECONDS",
                60,
                0..=MAX_CACHE_TTL_SECONDS,
            )?,
            spreadsheet_id: read("SPREADSHEET_ID").ok_or(AppConfigError::Missing("SPREADSHEET_ID"))?,
            roster_tab_name: read("ROSTER_TAB_NAME").unwrap_or_else(|| "Users".to_string()),
            google_userinfo_url: read("GOOGLE_USERINFO_URL")
                .unwrap_or_else(|| "https://www.googleapis.com/oauth2/v3/userinfo".to_string()),
            google_sheets_base_url: read("GOOGLE_SHEETS_BASE_URL")
                .unwrap_or_else(|| "https://sheets.googleapis.com".to_string()),
        })
    }
}

fn parse_admin_list(raw: &str) -> Result<BTreeSet<IdentityEmail>, AppConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            IdentityEmail::new(entry.to_string()).map_err(|e| AppConfigError::Invalid {
                name: "BOOTSTRAP_ADMIN_EMAILS",
                reason: format!("{entry}: {e}"),
            })
        })
        .collect()
}

fn parse_number<T: std::str::FromStr>(
    raw: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, AppConfigError>
where
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.parse().map_err(|e: T::Err| AppConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_seconds(
    raw: Option<String>,
    name: &'static str,
    default: u64,
    allowed: RangeInclusive<u64>,
) -> Result<Duration, AppConfigError> {
    let seconds = parse_number(raw, name, default)?;
    if !allowed.contains(&seconds) {
        return Err(AppConfigError::Invalid {
            name,
            reason: format!(
                "must be between {} and {} seconds",
                allowed.start(),
                allowed.end()
            ),
        });
    }
    Ok(Duration::from_secs(seconds))
}
