use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};
use wildbeat_core::{entities::Timestamp, gateways::email::EmailGateway};
use wildbeat_entities::email::*;

/// Stores outgoing e-mails as JSON files instead of sending them.
///
/// Useful for local development and testing.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonEmail {
    to: String,
    subject: String,
    body: String,
}

impl JsonEmail {
    fn new(to: &EmailAddress, content: &EmailContent) -> Self {
        Self {
            to: to.as_str().to_owned(),
            subject: content.subject.clone(),
            body: content.body.clone(),
        }
    }
}

/// File names are derived from the key, so it must not contain dots.
fn file_key(to: &EmailAddress) -> String {
    to.as_str().replace('@', "-at-").replace('.', "_")
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(&self, recipients: &[EmailAddress], content: &EmailContent) {
        for to in recipients {
            let now = Timestamp::now().as_millis();
            let key = format!("{now}-{}", file_key(to));
            let email = JsonEmail::new(to, content);
            if let Err(err) = self.json_store.save_with_id(&email, &key) {
                log::warn!("Unable to save email in JSON file: {err}");
            }
        }
    }
}
