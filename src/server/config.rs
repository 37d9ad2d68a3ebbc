//! Environment configuration.
//!
//! Values are read after `dotenvy` has loaded `.env`. Database and session store URLs are
//! required; the hosted auth and email settings degrade to placeholders with a logged
//! message so the marketing pages keep working while those services are unconfigured.

use dioxus_logger::tracing;

use crate::server::error::config::ConfigError;

/// Placeholder auth URL used when `AUTH_URL` is missing.
pub static PLACEHOLDER_AUTH_URL: &str = "https://placeholder.supabase.co";
/// Placeholder anon key used when `AUTH_ANON_KEY` is missing.
pub static PLACEHOLDER_AUTH_ANON_KEY: &str = "placeholder-key";
/// Default transactional email API endpoint.
pub static DEFAULT_EMAIL_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
/// Default business inbox that receives form submissions.
pub static DEFAULT_BUSINESS_EMAIL: &str = "serenewingscaregivingllc@gmail.com";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Hosted Postgres connection string
    pub database_url: String,
    /// Valkey/Redis URL for the session store
    pub valkey_url: String,
    /// Hosted auth service settings
    pub auth: AuthConfig,
    /// Transactional email service settings
    pub email: EmailConfig,
    /// Recipient of consultation, contact and testimonial emails
    pub business_email: String,
}

/// Hosted auth service settings.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Base URL of the hosted auth project
    pub url: String,
    /// Public anon key sent in the `apikey` header
    pub anon_key: String,
}

/// Transactional email service settings.
#[derive(Clone, Debug)]
pub struct EmailConfig {
    /// Full URL of the send endpoint
    pub api_url: String,
    /// Email service identifier
    pub service_id: String,
    /// Public key, sent as `user_id`
    pub public_key: String,
    /// Optional private access token
    pub private_key: Option<String>,
    /// Template for consultation requests
    pub consultation_template_id: String,
    /// Template for testimonial submissions
    pub testimonial_template_id: String,
    /// Template for contact messages
    pub contact_template_id: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as missing.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` missing
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let database_url = required("DATABASE_URL")?;
        let valkey_url = required("VALKEY_URL")?;

        let auth = match (get("AUTH_URL"), get("AUTH_ANON_KEY")) {
            (Some(url), Some(anon_key)) => AuthConfig { url, anon_key },
            (url, anon_key) => {
                tracing::error!(
                    "Missing AUTH_URL or AUTH_ANON_KEY environment variables; sign-in will not work until they are set"
                );

                AuthConfig {
                    url: url.unwrap_or_else(|| PLACEHOLDER_AUTH_URL.to_string()),
                    anon_key: anon_key.unwrap_or_else(|| PLACEHOLDER_AUTH_ANON_KEY.to_string()),
                }
            }
        };

        let with_default = |key: &str, default: &str| {
            get(key).unwrap_or_else(|| {
                tracing::warn!("{} is not set, falling back to {:?}", key, default);
                default.to_string()
            })
        };

        let consultation_template_id =
            with_default("EMAILJS_CONSULTATION_TEMPLATE_ID", "default_template");
        let email = EmailConfig {
            api_url: get("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_string()),
            service_id: with_default("EMAILJS_SERVICE_ID", "default_service"),
            public_key: with_default("EMAILJS_PUBLIC_KEY", "default_public_key"),
            private_key: get("EMAILJS_PRIVATE_KEY"),
            testimonial_template_id: with_default(
                "EMAILJS_TESTIMONIAL_TEMPLATE_ID",
                "default_testimonial_template",
            ),
            contact_template_id: get("EMAILJS_CONTACT_TEMPLATE_ID")
                .unwrap_or_else(|| consultation_template_id.clone()),
            consultation_template_id,
        };

        let business_email =
            get("BUSINESS_EMAIL").unwrap_or_else(|| DEFAULT_BUSINESS_EMAIL.to_string());

        Ok(Self {
            database_url,
            valkey_url,
            auth,
            email,
            business_email,
        })
    }
}
