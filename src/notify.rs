//! Report delivery
//!
//! Sends the rendered report over SMTP, or prints it to stdout when the
//! debug flag is set. Delivery failures are reported to the operator but
//! never abort the run.

use crate::config::SmtpSettings;
use crate::error::NotifyError;
use console::style;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

pub struct Notifier {
    settings: SmtpSettings,
    debug_only: bool,
}

impl Notifier {
    pub fn new(settings: SmtpSettings, debug_only: bool) -> Self {
        Self {
            settings,
            debug_only,
        }
    }

    /// Deliver the report, or preview it in debug mode
    pub async fn deliver(&self, recipients: &[String], subject: &str, body: &str) {
        let joined = recipients.join(",");

        if self.debug_only {
            println!(
                "{}",
                style("!!! DEBUG ONLY !!! No email will be sent, it's only for debug purposes.")
                    .yellow()
                    .bold()
            );
            println!("\nrecipients: {joined}\n");
            println!("email body:\n\n{body}");
            return;
        }

        match self.send(recipients, subject, body).await {
            Ok(()) => println!("email sent to {joined}"),
            Err(e) => {
                tracing::warn!("report delivery failed: {e}");
                println!("could not send email: {e}");
            }
        }
    }

    async fn send(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<(), NotifyError> {
        let from: Mailbox =
            self.settings
                .from
                .parse()
                .map_err(|e: lettre::address::AddressError| NotifyError::InvalidAddress {
                    address: self.settings.from.clone(),
                    message: e.to_string(),
                })?;

        let mut builder = Message::builder()
            .from(from)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);
        for recipient in recipients {
            let to: Mailbox =
                recipient
                    .parse()
                    .map_err(|e: lettre::address::AddressError| NotifyError::InvalidAddress {
                        address: recipient.clone(),
                        message: e.to_string(),
                    })?;
            builder = builder.to(to);
        }
        let message = builder.body(body.to_string())?;

        let mut transport =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(self.settings.host.as_str())
                .port(self.settings.port);
        if let (Some(username), Some(password)) = (&self.settings.username, &self.settings.password)
        {
            transport =
                transport.credentials(SmtpCredentials::new(username.clone(), password.clone()));
        }
        let mailer = transport.build();

        mailer.send(message).await?;
        Ok(())
    }
}
