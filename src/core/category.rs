/// Pattern categories
///
/// Each category ties together its validator, the human-readable label, the
/// input file it reads from and the stem used to name its output files.

use std::fmt;

use crate::core::patterns::{self, Validator};

/// One of the five fixed pattern domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Dollar amounts such as `$1,234.56`
    Currency,
    /// Phone numbers such as `+1 415-555-2671`
    Phone,
    /// Single HTML tags such as `<div class="a">`
    HtmlTag,
    /// Email addresses
    Email,
    /// http and https URLs
    Url,
}

impl Category {
    /// All categories, in the order the menu and "check all" use
    pub const ALL: [Category; 5] = [
        Category::Currency,
        Category::Phone,
        Category::HtmlTag,
        Category::Email,
        Category::Url,
    ];

    /// Label shown to the user; output file names derive from it
    pub fn label(self) -> &'static str {
        match self {
            Category::Currency => "currency amount",
            Category::Phone => "phone number",
            Category::HtmlTag => "HTML tag",
            Category::Email => "email address",
            Category::Url => "URL address",
        }
    }

    /// Input file name, relative to the input directory
    pub fn input_file(self) -> &'static str {
        match self {
            Category::Currency => "currency.txt",
            Category::Phone => "phones.txt",
            Category::HtmlTag => "htmltags.txt",
            Category::Email => "emails.txt",
            Category::Url => "urls.txt",
        }
    }

    /// Canonical stem of the output file names (`extracted_<stem>.txt`)
    pub fn file_stem(self) -> &'static str {
        match self {
            Category::Currency => "currency_amount",
            Category::Phone => "phone_number",
            Category::HtmlTag => "HTML_tag",
            Category::Email => "email_address",
            Category::Url => "URL_address",
        }
    }

    /// Menu line for this category
    pub fn menu_entry(self) -> &'static str {
        match self {
            Category::Currency => "Check Currency Amount From currency.txt",
            Category::Phone => "Check Phone Number From phones.txt",
            Category::HtmlTag => "Check HTML Tag From htmltags.txt",
            Category::Email => "Check Email Address From emails.txt",
            Category::Url => "Check URL Address From urls.txt",
        }
    }

    pub fn validator(self) -> Validator {
        match self {
            Category::Currency => patterns::check_currency,
            Category::Phone => patterns::check_phone,
            Category::HtmlTag => patterns::check_html_tag,
            Category::Email => patterns::check_email,
            Category::Url => patterns::check_url,
        }
    }

    /// Run this category's validator on a trimmed line
    pub fn validate(self, line: &str) -> bool {
        (self.validator())(line)
    }

    /// Map a menu number (1-5) to its category
    pub fn from_menu_number(number: i64) -> Option<Category> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decide whether `line` matches `category`'s grammar
pub fn validate(category: Category, line: &str) -> bool {
    category.validate(line)
}
