use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use wildbeat_entities::email::EmailAddress;
use wildbeat_gateways::payment::{FLUTTERWAVE_API_BASE_URL, MPESA_SANDBOX_BASE_URL};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "wildbeat.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
const ENV_NAME_STRIPE_WEBHOOK_SECRET: &str = "STRIPE_WEBHOOK_SECRET";
const ENV_NAME_ADMIN_SIGNUP_CODE: &str = "ADMIN_SIGNUP_CODE";

const MAILGUN_API_BASE_URL: &str = "https://api.eu.mailgun.net/v3";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub reviews: Reviews,
    pub email: Email,
    pub payments: Payments,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Ok(code) = env::var(ENV_NAME_ADMIN_SIGNUP_CODE) {
            self.auth.admin_signup_code = Some(code).filter(|c| !c.trim().is_empty());
        }
        if let Ok(secret_key) = env::var(ENV_NAME_STRIPE_SECRET_KEY) {
            let webhook_secret = self
                .payments
                .stripe
                .take()
                .map(|s| s.webhook_secret)
                .unwrap_or_default();
            self.payments.stripe = Some(Stripe {
                secret_key,
                webhook_secret,
            });
        }
        if let Ok(webhook_secret) = env::var(ENV_NAME_STRIPE_WEBHOOK_SECRET) {
            if let Some(stripe) = &mut self.payments.stripe {
                stripe.webhook_secret = webhook_secret;
            }
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    /// Base URL of this server, used in review approval links.
    pub public_base_url: String,
    pub frontend_url: String,
}

pub struct Auth {
    pub session_lifetime: Duration,
    pub admin_signup_code: Option<String>,
}

pub struct Reviews {
    pub require_approval: bool,
    pub admin_email: Option<EmailAddress>,
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Clone)]
pub enum EmailGateway {
    MailGun {
        api_url: String,
        api_key: String,
        domain: String,
        sender_address: EmailAddress,
    },
    Sendmail {
        sender_address: EmailAddress,
    },
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

#[derive(Default)]
pub struct Payments {
    pub stripe: Option<Stripe>,
    pub flutterwave: Option<Flutterwave>,
    pub mpesa: Option<Mpesa>,
}

pub struct Stripe {
    pub secret_key: String,
    pub webhook_secret: String,
}

pub struct Flutterwave {
    pub secret_key: String,
    pub api_base_url: String,
    pub redirect_url: Option<String>,
}

pub struct Mpesa {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub short_code: String,
    pub passkey: String,
    pub callback_url: String,
    pub api_base_url: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            auth,
            reviews,
            email,
            gateway,
            payments,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be zero"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            public_base_url,
            frontend_url,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            public_base_url,
            frontend_url,
        };

        let raw::Auth {
            session_lifetime,
            admin_signup_code,
        } = auth.unwrap_or_default();
        let auth = Auth {
            session_lifetime,
            admin_signup_code: admin_signup_code.filter(|c| !c.trim().is_empty()),
        };

        let raw::Reviews {
            require_approval,
            admin_email,
        } = reviews.unwrap_or_default();
        let admin_email = admin_email
            .map(|e| e.parse::<EmailAddress>())
            .transpose()?;
        let reviews = Reviews {
            require_approval,
            admin_email,
        };

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let missing = || anyhow!("Missing '{}' gateway configuration", gw_name.name());

                let gw = match gw_name {
                    raw::EmailGateway::Mailgun => {
                        let raw::MailGun {
                            api_key,
                            api_base_url,
                            domain,
                            sender_address,
                        } = gateway.mailgun.ok_or_else(missing)?;
                        let sender_address = sender_address.parse()?;
                        let api_url =
                            api_base_url.unwrap_or_else(|| MAILGUN_API_BASE_URL.to_owned());
                        log::info!("Use Mailgun gateway");
                        EmailGateway::MailGun {
                            api_key,
                            api_url,
                            domain,
                            sender_address,
                        }
                    }
                    raw::EmailGateway::Sendmail => {
                        let raw::Sendmail { sender_address } =
                            gateway.sendmail.ok_or_else(missing)?;
                        let sender_address = sender_address.parse()?;
                        log::info!("Use sendmail gateway");
                        EmailGateway::Sendmail { sender_address }
                    }
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.ok_or_else(missing)?;
                        log::info!("Use JSON file email gateway ({})", dir.display());
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let email = Email {
            gateway: email_gateway,
        };

        let raw::Payments {
            stripe,
            flutterwave,
            mpesa,
        } = payments.unwrap_or_default();

        let stripe = stripe.map(|s| {
            let raw::Stripe {
                secret_key,
                webhook_secret,
            } = s;
            Stripe {
                secret_key,
                webhook_secret: webhook_secret.unwrap_or_default(),
            }
        });
        let flutterwave = flutterwave.map(|f| {
            let raw::Flutterwave {
                secret_key,
                api_base_url,
                redirect_url,
            } = f;
            Flutterwave {
                secret_key,
                api_base_url: api_base_url.unwrap_or_else(|| FLUTTERWAVE_API_BASE_URL.to_owned()),
                redirect_url,
            }
        });
        let mpesa = mpesa.map(|m| {
            let raw::Mpesa {
                consumer_key,
                consumer_secret,
                short_code,
                passkey,
                callback_url,
                api_base_url,
            } = m;
            Mpesa {
                consumer_key,
                consumer_secret,
                short_code,
                passkey,
                callback_url,
                api_base_url: api_base_url.unwrap_or_else(|| MPESA_SANDBOX_BASE_URL.to_owned()),
            }
        });
        let payments = Payments {
            stripe,
            flutterwave,
            mpesa,
        };

        Ok(Self {
            db,
            webserver,
            auth,
            reviews,
            email,
            payments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn convert_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.db.conn_sqlite, "wildbeat.db");
        assert_eq!(cfg.db.conn_pool_size, 10);
        assert!(!cfg.webserver.enable_cors);
        assert!(!cfg.reviews.require_approval);
        assert!(cfg.auth.admin_signup_code.is_none());
        assert!(cfg.email.gateway.is_none());
        assert!(cfg.payments.stripe.is_none());
    }

    #[test]
    fn missing_email_gateway_configuration() {
        let raw: raw::Config = toml::from_str(
            r#"
            [email]
            gateway = "mailgun"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn use_default_provider_urls() {
        let raw: raw::Config = toml::from_str(
            r#"
            [payments.flutterwave]
            secret-key = "FLWSECK_TEST"
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        let flutterwave = cfg.payments.flutterwave.unwrap();
        assert_eq!(flutterwave.api_base_url, FLUTTERWAVE_API_BASE_URL);
        assert!(flutterwave.redirect_url.is_none());
    }

    #[test]
    fn empty_admin_code_is_ignored() {
        let raw: raw::Config = toml::from_str(
            r#"
            [auth]
            session-lifetime = "2h"
            admin-signup-code = " "
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert!(cfg.auth.admin_signup_code.is_none());
        assert_eq!(cfg.auth.session_lifetime, Duration::from_secs(2 * 60 * 60));
    }
}
