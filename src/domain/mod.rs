//! Domain types for the contact book.

pub mod contact;

pub use contact::{Contact, ContactForm, NewContact, Submission};
