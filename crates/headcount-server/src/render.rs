//! Server-side HTML rendering.
//!
//! Page shells are static files embedded at compile time; fragments for the
//! contacts table are assembled here. Every user-supplied value passes
//! through [`escape_html`] before it reaches the markup.

use headcount_core::Contact;

const INDEX_HTML: &str = include_str!("../static/index.html");
const ABOUT_HTML: &str = include_str!("../static/about.html");
const NOT_FOUND_HTML: &str = include_str!("../static/not_found.html");
const SERVER_ERROR_HTML: &str = include_str!("../static/server_error.html");

pub fn index_page() -> &'static str {
    INDEX_HTML
}

pub fn about_page() -> &'static str {
    ABOUT_HTML
}

pub fn not_found_page() -> &'static str {
    NOT_FOUND_HTML
}

pub fn server_error_page() -> &'static str {
    SERVER_ERROR_HTML
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// The full contacts table, rows in store order.
pub fn contacts_table(contacts: &[Contact]) -> String {
    let mut html = String::from(
        "<table id=\"contacts-table\" class=\"contacts\">\
         <thead><tr><th>Name</th><th>Email</th><th>Phone</th><th>Active</th><th></th></tr></thead>\
         <tbody id=\"hx-contacts\">",
    );
    if contacts.is_empty() {
        html.push_str("<tr class=\"empty\"><td colspan=\"5\">No contacts yet.</td></tr>");
    }
    for contact in contacts {
        html.push_str(&contact_row(contact));
    }
    html.push_str("</tbody></table>");
    html
}

/// A single table row, addressable as `#contact-{id}` for out-of-band swaps.
pub fn contact_row(contact: &Contact) -> String {
    let id = contact.id;
    let name = escape_html(&contact.name);
    let email = escape_html(&contact.email);
    let phone = escape_html(&contact.phone);
    let checked = if contact.status.is_enabled() {
        " checked"
    } else {
        ""
    };

    format!(
        "<tr id=\"contact-{id}\" class=\"contact\" data-status=\"{status}\">\
         <td>{name}</td>\
         <td><a href=\"mailto:{email}\">{email}</a></td>\
         <td>{phone}</td>\
         <td><input type=\"checkbox\" name=\"status\" aria-label=\"Active\"{checked} \
         hx-patch=\"/contacts/{id}/status\" hx-target=\"#contact-{id}\" hx-swap=\"outerHTML\"></td>\
         <td class=\"actions\">\
         <button hx-get=\"/contacts/{id}/edit\" hx-target=\"#slideout\" hx-swap=\"innerHTML\">Edit</button>\
         <button hx-delete=\"/contacts/{id}\" hx-target=\"#contact-{id}\" hx-swap=\"outerHTML\" \
         hx-confirm=\"Delete {name}?\">Delete</button>\
         </td></tr>",
        status = contact.status,
    )
}

/// The edit form for `contact`, pre-filled with its stored values.
pub fn contact_put_form(contact: &Contact) -> String {
    let id = contact.id;
    let name = escape_html(&contact.name);
    let email = escape_html(&contact.email);
    let phone = escape_html(&contact.phone);
    let checked = if contact.status.is_enabled() {
        " checked"
    } else {
        ""
    };

    format!(
        "<form class=\"contact-form\" hx-put=\"/contacts/{id}\" hx-target=\"#contact-{id}\" hx-swap=\"outerHTML\">\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label>\
         <label>Email <input type=\"email\" name=\"email\" value=\"{email}\" required></label>\
         <label>Phone <input type=\"tel\" name=\"phone\" value=\"{phone}\"></label>\
         <label>Active <input type=\"checkbox\" name=\"status\"{checked}></label>\
         <button type=\"submit\">Save</button>\
         </form>"
    )
}

/// Wraps `content` in the slide-out side panel.
pub fn slideout(content: &str, close_label: &str, open: bool) -> String {
    format!(
        "<aside class=\"slideout\" data-open=\"{open}\">\
         <button class=\"slideout-close\" onclick=\"this.closest('aside').remove()\">{label}</button>\
         {content}</aside>",
        label = escape_html(close_label),
    )
}
