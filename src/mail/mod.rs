/// SMTP delivery
pub mod smtp;

pub use smtp::{Mailer, SmtpMailer};
