use std::sync::Arc;

use anyhow::Context;
use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, Message, SmtpTransport,
    Transport,
};
use tracing::{info, warn};

use crate::config::SmtpConfig;

/// Emails a summary of each chat interaction. Disabled when SMTP settings
/// are absent; `spawn_notify` is then a no-op.
#[derive(Clone)]
pub struct Notifier {
    inner: Option<Arc<Inner>>,
}

struct Inner {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl Notifier {
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn from_config(cfg: Option<&SmtpConfig>) -> anyhow::Result<Self> {
        let Some(cfg) = cfg else {
            info!("smtp not configured; interaction notifications disabled");
            return Ok(Self::disabled());
        };

        let transport = SmtpTransport::starttls_relay(&cfg.host)
            .context("smtp relay setup")?
            .port(cfg.port)
            .credentials(Credentials::new(cfg.username.clone(), cfg.password.clone()))
            .build();
        let from = cfg
            .from
            .parse::<Mailbox>()
            .context("parse NOTIFY_FROM address")?;
        let to = cfg.to.parse::<Mailbox>().context("parse NOTIFY_TO address")?;

        Ok(Self {
            inner: Some(Arc::new(Inner { transport, from, to })),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Send the notification in the background. Failures are logged and
    /// never surface to the chat request that triggered them.
    pub fn spawn_notify(&self, user_message: &str, bot_response: &str) {
        let Some(inner) = self.inner.clone() else {
            return;
        };
        let body = format!(
            "User Message: {}\nBot Response: {}",
            user_message, bot_response
        );

        tokio::task::spawn_blocking(move || {
            let message = match Message::builder()
                .from(inner.from.clone())
                .to(inner.to.clone())
                .subject("New Chatbot Interaction")
                .body(body)
            {
                Ok(m) => m,
                Err(e) => {
                    warn!(error = %e, "failed to build notification email");
                    return;
                }
            };
            if let Err(e) = inner.transport.send(&message) {
                warn!(error = %e, "failed to send notification email");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".into(),
            port: 587,
            username: "mailer".into(),
            password: "mailer-password".into(),
            from: "bot@example.com".into(),
            to: "support@example.com".into(),
        }
    }

    #[test]
    fn missing_config_disables_notifications() {
        let notifier = Notifier::from_config(None).expect("build notifier");
        assert!(!notifier.is_enabled());
    }

    #[test]
    fn full_config_enables_notifications() {
        let notifier = Notifier::from_config(Some(&sample_config())).expect("build notifier");
        assert!(notifier.is_enabled());
    }

    #[test]
    fn disabled_notifier_ignores_notifications() {
        Notifier::disabled().spawn_notify("hello", "world");
    }

    #[test]
    fn bad_address_is_rejected() {
        let mut cfg = sample_config();
        cfg.from = "not an address".into();
        assert!(Notifier::from_config(Some(&cfg)).is_err());
    }
}
