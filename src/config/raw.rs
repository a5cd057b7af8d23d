use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("wildbeat.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub auth: Option<Auth>,
    pub reviews: Option<Reviews>,
    pub email: Option<Email>,
    pub gateway: Option<Gateway>,
    pub payments: Option<Payments>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub public_base_url: String,
    pub frontend_url: String,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    #[serde(deserialize_with = "deserialize_duration")]
    pub session_lifetime: Duration,
    pub admin_signup_code: Option<String>,
}

impl Default for Auth {
    fn default() -> Self {
        Config::default().auth.expect("Auth configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reviews {
    pub require_approval: bool,
    pub admin_email: Option<String>,
}

impl Default for Reviews {
    fn default() -> Self {
        Config::default().reviews.expect("Reviews configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailGateway {
    Mailgun,
    Sendmail,
    EmailToJsonFile,
}

impl EmailGateway {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mailgun => "mailgun",
            Self::Sendmail => "sendmail",
            Self::EmailToJsonFile => "email-to-json-file",
        }
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub mailgun: Option<MailGun>,
    pub sendmail: Option<Sendmail>,
    pub email_to_json_file: Option<EmailToJsonFile>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MailGun {
    pub api_key: String,
    pub domain: String,
    pub sender_address: String,
    pub api_base_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sendmail {
    pub sender_address: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmailToJsonFile {
    pub dir: PathBuf,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Payments {
    pub stripe: Option<Stripe>,
    pub flutterwave: Option<Flutterwave>,
    pub mpesa: Option<Mpesa>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Stripe {
    pub secret_key: String,
    pub webhook_secret: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Flutterwave {
    pub secret_key: String,
    pub api_base_url: Option<String>,
    pub redirect_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Mpesa {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub short_code: String,
    pub passkey: String,
    pub callback_url: String,
    pub api_base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.auth.is_some());
        assert!(cfg.reviews.is_some());
        assert!(cfg.email.and_then(|e| e.gateway).is_none());
        assert!(cfg.payments.is_none());
    }

    #[test]
    fn default_session_lifetime_is_one_day() {
        assert_eq!(
            Auth::default().session_lifetime,
            Duration::from_secs(24 * 60 * 60)
        );
    }

    #[test]
    fn parse_payment_providers() {
        let cfg: Config = toml::from_str(
            r#"
            [payments.stripe]
            secret-key = "sk_test_123"

            [payments.mpesa]
            consumer-key = "key"
            consumer-secret = "secret"
            short-code = "174379"
            passkey = "pass"
            callback-url = "https://example.com/callback"
            "#,
        )
        .unwrap();
        let payments = cfg.payments.unwrap();
        let stripe = payments.stripe.unwrap();
        assert_eq!(stripe.secret_key, "sk_test_123");
        assert!(stripe.webhook_secret.is_none());
        assert!(payments.flutterwave.is_none());
        assert_eq!(payments.mpesa.unwrap().short_code, "174379");
    }
}
