//! Contact records and the rules deciding what a form submission does.

use serde::Serialize;
use utoipa::ToSchema;

pub const MSG_ADDED: &str = "Contact added successfully.";
pub const MSG_DELETED: &str = "Contact deleted successfully.";
pub const MSG_MISSING_ID: &str = "Missing contact id.";
pub const MSG_MISSING_FIELDS: &str = "Missing name or phone number.";

/// A stored contact. `id` is assigned by storage and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

/// A contact that passed validation and may be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    phone: String,
}

impl NewContact {
    /// Returns `None` unless both fields are present and non-empty.
    ///
    /// Whitespace counts as content; no trimming or format checks are applied.
    pub fn validate(name: Option<&str>, phone: Option<&str>) -> Option<Self> {
        match (name, phone) {
            (Some(name), Some(phone)) if !name.is_empty() && !phone.is_empty() => Some(Self {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Raw form body posted to `/`. Every field is optional on the wire.
#[derive(Debug, Default, ToSchema)]
pub struct ContactForm {
    /// `"delete"` selects the delete branch; anything else adds.
    pub action: Option<String>,
    pub contact_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl ContactForm {
    /// Builds a form from decoded key/value pairs. When a key repeats, the
    /// first value wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = ContactForm::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "action" => &mut form.action,
                "contact_id" => &mut form.contact_id,
                "name" => &mut form.name,
                "phone" => &mut form.phone,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }
}

/// What a POST asks for, after presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Delete by raw id text; `None` when the id was missing or empty.
    Delete(Option<String>),
    /// Insert; `None` when name or phone was missing or empty.
    Add(Option<NewContact>),
}

impl Submission {
    pub fn from_form(form: &ContactForm) -> Self {
        if form.action.as_deref() == Some("delete") {
            let id = form
                .contact_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(str::to_string);
            return Submission::Delete(id);
        }
        Submission::Add(NewContact::validate(
            form.name.as_deref(),
            form.phone.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(action: Option<&str>, id: Option<&str>, name: Option<&str>, phone: Option<&str>) -> ContactForm {
        ContactForm {
            action: action.map(str::to_string),
            contact_id: id.map(str::to_string),
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn add_requires_both_fields() {
        assert!(NewContact::validate(Some("Alice"), Some("555-1234")).is_some());
        assert!(NewContact::validate(Some("Alice"), None).is_none());
        assert!(NewContact::validate(None, Some("555-1234")).is_none());
        assert!(NewContact::validate(Some(""), Some("555-1234")).is_none());
        assert!(NewContact::validate(Some("Alice"), Some("")).is_none());
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let c = NewContact::validate(Some(" "), Some(" 1 ")).unwrap();
        assert_eq!(c.name(), " ");
        assert_eq!(c.phone(), " 1 ");
    }

    #[test]
    fn delete_action_wins_over_add_fields() {
        let s = Submission::from_form(&form(Some("delete"), Some("3"), Some("Bob"), Some("1")));
        assert_eq!(s, Submission::Delete(Some("3".to_string())));
    }

    #[test]
    fn delete_with_empty_id_is_missing() {
        assert_eq!(
            Submission::from_form(&form(Some("delete"), Some(""), None, None)),
            Submission::Delete(None)
        );
        assert_eq!(
            Submission::from_form(&form(Some("delete"), None, None, None)),
            Submission::Delete(None)
        );
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let form = ContactForm::from_pairs(pairs(&[
            ("action", "delete"),
            ("contact_id", "3"),
            ("contact_id", "4"),
        ]));
        assert_eq!(
            Submission::from_form(&form),
            Submission::Delete(Some("3".to_string()))
        );

        let form = ContactForm::from_pairs(pairs(&[
            ("name", "Al"),
            ("name", "Bo"),
            ("phone", "1"),
            ("extra", "x"),
        ]));
        match Submission::from_form(&form) {
            Submission::Add(Some(c)) => {
                assert_eq!(c.name(), "Al");
                assert_eq!(c.phone(), "1");
            }
            other => panic!("unexpected submission: {:?}", other),
        }
    }

    #[test]
    fn first_empty_value_still_counts_as_missing() {
        let form = ContactForm::from_pairs(pairs(&[
            ("action", "delete"),
            ("contact_id", ""),
            ("contact_id", "3"),
        ]));
        assert_eq!(Submission::from_form(&form), Submission::Delete(None));
    }

    #[test]
    fn unknown_action_falls_back_to_add() {
        let s = Submission::from_form(&form(Some("Delete"), Some("3"), Some("Bob"), Some("1")));
        match s {
            Submission::Add(Some(c)) => assert_eq!(c.name(), "Bob"),
            other => panic!("unexpected submission: {:?}", other),
        }
        assert_eq!(
            Submission::from_form(&ContactForm::default()),
            Submission::Add(None)
        );
    }
}
