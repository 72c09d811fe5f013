// src/config.rs
use email_address::EmailAddress;
use std::env;

use crate::modules::site::application::domain::SiteSettings;

const DEFAULT_PROJECTS_VISIBLE_COUNT: usize = 6;
const DEFAULT_LOCAL_SMTP_HOST: &str = "localhost";
const DEFAULT_LOCAL_SMTP_PORT: u16 = 1025;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("{key} is not a valid email address: {value}")]
    InvalidEmail { key: &'static str, value: String },
}

/// How inquiry mail leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub enum SmtpSettings {
    /// Authenticated TLS relay, chosen whenever `SMTP_SERVER` is set.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher such as Mailpit.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub site: SiteSettings,
    /// Falls back to the business email when unset.
    pub inquiry_recipient: Option<String>,
    pub projects_visible_count: usize,
    pub seed_content: bool,
    pub smtp: SmtpSettings,
    pub email_from: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let email = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match get(key) {
                Some(value) if !EmailAddress::is_valid(&value) => {
                    Err(ConfigError::InvalidEmail { key, value })
                }
                other => Ok(other),
            }
        };

        let host = required("HOST")?;
        let port = parse("PORT", required("PORT")?)?;
        let database_url = required("DATABASE_URL")?;

        let site_url = get("SITE_URL");
        if let Some(url) = &site_url {
            let valid = url::Url::parse(url)
                .map(|u| matches!(u.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !valid {
                return Err(ConfigError::Invalid {
                    key: "SITE_URL",
                    value: url.clone(),
                });
            }
        }

        let site = SiteSettings {
            site_url,
            phone: get("BUSINESS_PHONE"),
            whatsapp: get("BUSINESS_WHATSAPP"),
            email: email("BUSINESS_EMAIL")?,
            map_embed_url: get("MAP_EMBED_URL"),
            hero_video_id: get("HERO_VIDEO_ID"),
        };

        let projects_visible_count = match get("PROJECTS_VISIBLE_COUNT") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "PROJECTS_VISIBLE_COUNT",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_PROJECTS_VISIBLE_COUNT,
        };

        let seed_content = match get("SEED_CONTENT").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "SEED_CONTENT",
                    value: other.to_string(),
                })
            }
        };

        let smtp = match get("SMTP_SERVER") {
            Some(server) => SmtpSettings::Relay {
                server,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            },
            None => SmtpSettings::Local {
                host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_LOCAL_SMTP_HOST.to_string()),
                port: match get("SMTP_PORT") {
                    Some(raw) => parse("SMTP_PORT", raw)?,
                    None => DEFAULT_LOCAL_SMTP_PORT,
                },
            },
        };

        let email_from = email("EMAIL_FROM")?.ok_or(ConfigError::Missing("EMAIL_FROM"))?;

        Ok(Self {
            host,
            port,
            database_url,
            site,
            inquiry_recipient: email("INQUIRY_RECIPIENT")?,
            projects_visible_count,
            seed_content,
            smtp,
            email_from,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse(key: &'static str, raw: String) -> Result<u16, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}
