//! Prefilled message text and contact deep links
//!
//! Every outbound link the site builds (WhatsApp chats, click-to-call)
//! is assembled here so the wording stays in one place.

use crate::LeadInquiry;

/// Prefill used by the floating WhatsApp button and the about page
pub const GENERAL_ENQUIRY_TEXT: &str = "Hi, I'm interested in your properties.";

/// Compose the WhatsApp message used when form delivery fails
pub fn fallback_message(inquiry: &LeadInquiry) -> String {
    format!(
        "Hi, I'm {}.\n\nInterested in: {}\n\nMessage: {}\n\nContact: {}",
        inquiry.name,
        inquiry.interest,
        inquiry.message_or_empty(),
        inquiry.phone
    )
}

/// Prefill for the enquiry button on a project card or lightbox
pub fn project_enquiry_text(title: &str, price: &str) -> String {
    format!("Hi, I'm interested in {} ({})", title, price)
}

/// `https://wa.me/{number}?text={encoded}` with the text percent-encoded
pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(number),
        urlencoding::encode(text)
    )
}

/// `tel:` link for click-to-call
pub fn tel_link(phone: &str) -> String {
    let compact: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", compact)
}

fn digits_only(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}
