use anyhow::{bail, Result};
use fast_chemail::is_valid_email;
#[cfg(not(test))]
use std::{
    io::Write as _,
    process::{Command, Stdio},
};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};
use wildbeat_core::gateways::email::EmailGateway;
use wildbeat_entities::email::*;

/// Delivers e-mails through the local `sendmail` binary.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: EmailAddress,
}

impl Sendmail {
    pub const fn new(from: EmailAddress) -> Self {
        Self { from }
    }
}

impl EmailGateway for Sendmail {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        log::debug!("Sending e-mails to: {recipients:?}");
        for to in recipients {
            let mail = match compose(self.from.as_str(), to.as_str(), email) {
                Ok(mail) => mail,
                Err(err) => {
                    log::warn!("Failed to compose e-mail to {to}: {err}");
                    continue;
                }
            };
            std::thread::spawn(move || {
                if let Err(err) = pipe_to_sendmail(&mail) {
                    log::warn!("Could not send e-mail: {err}");
                }
            });
        }
    }
}

#[cfg(not(test))]
fn pipe_to_sendmail(mail: &str) -> Result<()> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(mail.as_bytes())?,
        None => bail!("sendmail has no stdin"),
    }
    let status = child.wait()?;
    if !status.success() {
        bail!("sendmail exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
fn pipe_to_sendmail(mail: &str) -> Result<()> {
    log::debug!("Would send e-mail: {mail}");
    Ok(())
}

const SUBJECT_PREFIX: &str = "Subject: ";

/// Room for Q-encoded text in one encoded word so that
/// no header line exceeds 76 chars.
const ENCODED_TEXT_LEN: usize = 76 - SUBJECT_PREFIX.len() - "=?UTF-8?Q??=".len();

fn q_encode(ch: char) -> String {
    match ch {
        ' ' => "_".to_owned(),
        '?' | '_' | '=' | '\t' => format!("={:02X}", u32::from(ch)),
        _ => quoted_printable::encode_to_str(ch.encode_utf8(&mut [0; 4]).as_bytes()),
    }
}

/// Encodes the subject as RFC 2047 encoded words, folded over several lines.
fn subject_header(subject: &str) -> String {
    let mut words = vec![String::new()];
    for ch in subject.chars() {
        let encoded = q_encode(ch);
        if let Some(word) = words.last_mut() {
            if word.is_empty() || word.len() + encoded.len() <= ENCODED_TEXT_LEN {
                word.push_str(&encoded);
                continue;
            }
        }
        words.push(encoded);
    }
    let words: Vec<_> = words
        .into_iter()
        .map(|word| format!("=?UTF-8?Q?{word}?="))
        .collect();
    format!("{SUBJECT_PREFIX}{}", words.join("\r\n "))
}

fn compose(from: &str, to: &str, email: &EmailContent) -> Result<String> {
    if !is_valid_email(to) {
        bail!("invalid recipient address '{to}'");
    }
    let date = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(&Rfc2822)?;
    Ok([
        format!("Date: {date}"),
        format!("From: {from}"),
        format!("To: {to}"),
        subject_header(&email.subject),
        "MIME-Version: 1.0".to_owned(),
        "Content-Type: text/plain; charset=utf-8".to_owned(),
        String::new(),
        email.body.clone(),
    ]
    .join("\r\n"))
}
