use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::modules::inquiry::application::ports::outgoing::EmailSender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Keeps every message for later assertions. Clones share the same outbox.
#[derive(Default, Clone)]
pub struct RecordingEmailSender {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    failure: Option<String>,
}

impl RecordingEmailSender {
    /// Every send fails with `reason` and nothing is recorded.
    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(reason.to_string()),
        }
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if let Some(reason) = &self.failure {
            return Err(reason.clone());
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
