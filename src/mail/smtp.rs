/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::SmtpConfig;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::info;

/// Sends HTML email
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one message with a single HTML body to every address in `to`
    async fn send_html(&self, to: &[String], subject: &str, html: &str) -> AppResult<()>;
}

/// [`Mailer`] speaking SMTP with STARTTLS and login credentials
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Creates a mailer; nothing is contacted until the first send
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Builds the message without sending it
    pub fn build_message(&self, to: &[String], subject: &str, html: &str) -> AppResult<Message> {
        if to.is_empty() {
            return Err(AppError::InvalidInput(
                "Please provide at least one recipient email".to_string(),
            ));
        }

        let from_address: Address = self.config.from_email.trim().parse()?;
        let from = Mailbox::new(Some(self.config.from_name.clone()), from_address);

        let mut builder = Message::builder().from(from).subject(subject);
        for recipient in to {
            let mailbox: Mailbox = recipient.trim().parse()?;
            builder = builder.to(mailbox);
        }

        Ok(builder
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())?)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_html(&self, to: &[String], subject: &str, html: &str) -> AppResult<()> {
        let message = self.build_message(to, subject, html)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.server)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .build();

        transport.send(message).await?;
        info!("Email '{}' sent to {} recipient(s)", subject, to.len());
        Ok(())
    }
}
