//! HTML rendering for the contacts page.
//!
//! Takes the typed [`ContactsPage`] view model and produces the full
//! document. Every interpolated value goes through [`escape_html`].

use crate::app::contact_service::ContactsPage;
use crate::domain::Contact;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Contacts</title>
</head>
<body>
    <h2>Add Contact</h2>
    <form method="POST" action="/">
        <label for="name">Name:</label><br>
        <input type="text" id="name" name="name" required><br>
        <label for="phone">Phone Number:</label><br>
        <input type="text" id="phone" name="phone" required><br><br>
        <input type="submit" value="Submit">
    </form>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

const TABLE_HEAD: &str = r#"    <table border="1" cellpadding="6" cellspacing="0">
        <tr>
            <th>Name</th>
            <th>Phone Number</th>
            <th>Delete</th>
        </tr>
"#;

pub const EMPTY_PLACEHOLDER: &str = "No contacts found.";

pub fn render_contacts_page(page: &ContactsPage) -> String {
    let mut html = String::with_capacity(1024 + page.contacts.len() * 384);
    html.push_str(PAGE_HEAD);

    if !page.message.is_empty() {
        html.push_str("    <p>");
        html.push_str(&escape_html(&page.message));
        html.push_str("</p>\n");
    }

    if page.contacts.is_empty() {
        html.push_str("    <p>");
        html.push_str(EMPTY_PLACEHOLDER);
        html.push_str("</p>\n");
    } else {
        html.push_str(TABLE_HEAD);
        for contact in &page.contacts {
            push_contact_row(&mut html, contact);
        }
        html.push_str("    </table>\n");
    }

    html.push_str(PAGE_TAIL);
    html
}

fn push_contact_row(html: &mut String, contact: &Contact) {
    html.push_str(&format!(
        r#"        <tr>
            <td>{name}</td>
            <td>{phone}</td>
            <td>
                <form method="POST" action="/">
                    <input type="hidden" name="contact_id" value="{id}">
                    <input type="hidden" name="action" value="delete">
                    <input type="submit" value="Delete">
                </form>
            </td>
        </tr>
"#,
        name = escape_html(&contact.name),
        phone = escape_html(&contact.phone),
        id = contact.id,
    ));
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
