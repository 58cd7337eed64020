/// Pattern definitions for the checker
///
/// This module contains the regex grammars for the five supported categories
/// (currency amounts, phone numbers, HTML tags, email addresses and URLs) and
/// the validator predicates built on top of them. Every validator performs a
/// full-string match against a single trimmed line.

use lazy_static::lazy_static;
use regex::Regex;

/// A validator decides whether one trimmed line belongs to a category
pub type Validator = fn(&str) -> bool;

/// Grouped (`$1,234.56`) or plain (`$1234.56`) dollar amounts
pub const CURRENCY_PATTERN: &str =
    r"^\$[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})?$|^\$[0-9]+(?:\.[0-9]{2})?$";

/// Optional `+CC` prefix, area code with or without parentheses, then 3 + 4 digits
pub const PHONE_PATTERN: &str =
    r"^(?:\+[0-9]{1,3}[ .-]?)?(?:\([0-9]{3}\)|[0-9]{3})[ .-]?[0-9]{3}[ .-]?[0-9]{4}$";

/// Opening, closing or self-closing tag with quoted attributes, on one line
pub const HTML_TAG_PATTERN: &str = r#"^</?[A-Za-z][A-Za-z0-9]*(?:[ \t]+[A-Za-z_:][-A-Za-z0-9_:.]*=(?:"[^"\r\n]*"|'[^'\r\n]*'))*[ \t]*/?>$"#;

pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$";

pub const URL_PATTERN: &str =
    r"^https?://(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}(?::[0-9]+)?(?:/\S*)?(?:\?\S*)?(?:#\S*)?$";

lazy_static! {
    static ref CURRENCY: Regex = Regex::new(CURRENCY_PATTERN).expect("currency pattern compiles");
    static ref PHONE: Regex = Regex::new(PHONE_PATTERN).expect("phone pattern compiles");
    static ref HTML_TAG: Regex = Regex::new(HTML_TAG_PATTERN).expect("HTML tag pattern compiles");
    static ref EMAIL: Regex = Regex::new(EMAIL_PATTERN).expect("email pattern compiles");
    static ref URL: Regex = Regex::new(URL_PATTERN).expect("URL pattern compiles");
}

/// Check whether a line is a dollar amount
pub fn check_currency(text: &str) -> bool {
    CURRENCY.is_match(text)
}

/// Check whether a line is a phone number
pub fn check_phone(text: &str) -> bool {
    PHONE.is_match(text)
}

/// Check whether a line is a single HTML tag
pub fn check_html_tag(text: &str) -> bool {
    HTML_TAG.is_match(text)
}

/// Check whether a line is an email address
pub fn check_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

/// Check whether a line is an http(s) URL
pub fn check_url(text: &str) -> bool {
    URL.is_match(text)
}

/// Every grammar paired with its name, for diagnostics
pub fn all_patterns() -> [(&'static str, &'static str); 5] {
    [
        ("currency", CURRENCY_PATTERN),
        ("phone", PHONE_PATTERN),
        ("html_tag", HTML_TAG_PATTERN),
        ("email", EMAIL_PATTERN),
        ("url", URL_PATTERN),
    ]
}
