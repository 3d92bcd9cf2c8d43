//! The contact service.
//!
//! Decides what a POST does to storage and which message it reports, and
//! gathers everything a GET needs to render the page. It holds no state of
//! its own between requests: storage is the only owner of contacts.

use crate::domain::contact::{MSG_ADDED, MSG_DELETED, MSG_MISSING_FIELDS, MSG_MISSING_ID};
use crate::domain::{Contact, ContactForm, Submission};
use crate::storage::{ContactRepository, StorageResult};
use std::sync::Arc;
use tracing::info;

/// Data handed to the renderer for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsPage {
    /// Empty when there is nothing to report.
    pub message: String,
    pub contacts: Vec<Contact>,
}

#[derive(Clone)]
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Applies a posted form and returns the message to redirect with.
    ///
    /// Missing fields are not errors; they only change the message. Storage
    /// failures are returned to the caller untouched.
    pub async fn submit(&self, form: &ContactForm) -> StorageResult<&'static str> {
        match Submission::from_form(form) {
            Submission::Delete(Some(id)) => {
                let removed = self.repo.delete(&id).await?;
                info!(contact_id = %id, removed, "delete request handled");
                Ok(MSG_DELETED)
            }
            Submission::Delete(None) => Ok(MSG_MISSING_ID),
            Submission::Add(Some(contact)) => {
                let id = self.repo.insert(&contact).await?;
                info!(id, "contact added");
                Ok(MSG_ADDED)
            }
            Submission::Add(None) => Ok(MSG_MISSING_FIELDS),
        }
    }

    /// Reads every contact for the page, alongside the message to show.
    pub async fn page(&self, message: String) -> StorageResult<ContactsPage> {
        let contacts = self.repo.list().await?;
        Ok(ContactsPage { message, contacts })
    }

    pub async fn ping(&self) -> StorageResult<()> {
        self.repo.ping().await
    }
}
