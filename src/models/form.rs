//! Form fields and the current form values.

use std::fmt;

/// Keywords pre-filled into a fresh form.
pub const DEFAULT_KEYWORDS: &str = "Software Engineer, Entry Level";

/// How a field is edited and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line email address (no format validation)
    Email,
    /// Single-line secret, masked on screen
    Password,
    /// Free text that may span several lines
    Multiline,
}

/// One of the five fixed form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    LinkedinEmail,
    LinkedinPassword,
    UserEmail,
    EmailPassword,
    Keywords,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 5] = [
        FormField::LinkedinEmail,
        FormField::LinkedinPassword,
        FormField::UserEmail,
        FormField::EmailPassword,
        FormField::Keywords,
    ];

    /// Key used in the JSON request body.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::LinkedinEmail => "linkedinEmail",
            FormField::LinkedinPassword => "linkedinPassword",
            FormField::UserEmail => "userEmail",
            FormField::EmailPassword => "emailPassword",
            FormField::Keywords => "keywords",
        }
    }

    /// Placeholder / label shown next to the input.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::LinkedinEmail => "LinkedIn Email",
            FormField::LinkedinPassword => "LinkedIn Password",
            FormField::UserEmail => "Your Email (to receive links)",
            FormField::EmailPassword => "App Password (Gmail)",
            FormField::Keywords => "Job Keywords (comma separated)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::LinkedinEmail | FormField::UserEmail => FieldKind::Email,
            FormField::LinkedinPassword | FormField::EmailPassword => FieldKind::Password,
            FormField::Keywords => FieldKind::Multiline,
        }
    }

    pub fn is_masked(self) -> bool {
        self.kind() == FieldKind::Password
    }

    /// Position in [`FormField::ALL`].
    pub fn index(self) -> usize {
        match self {
            FormField::LinkedinEmail => 0,
            FormField::LinkedinPassword => 1,
            FormField::UserEmail => 2,
            FormField::EmailPassword => 3,
            FormField::Keywords => 4,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Current values of every field.
///
/// `Debug` never prints password values.
#[derive(Clone, PartialEq, Eq)]
pub struct FormState {
    values: [String; 5],
}

impl FormState {
    /// A fresh form: everything empty except the default keywords.
    pub fn new() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS)
    }

    /// A fresh form with the given keyword text pre-filled.
    pub fn with_keywords(keywords: impl Into<String>) -> Self {
        let mut form = Self::empty();
        form.set(FormField::Keywords, keywords);
        form
    }

    /// A form with every field empty.
    pub fn empty() -> Self {
        Self {
            values: Default::default(),
        }
    }

    /// Builder-style setter.
    pub fn with_field(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Fields that are still empty, in display order.
    ///
    /// Presence is the only rule: whitespace counts as a value and email
    /// fields are not checked for format.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Keywords the way the backend reads them: comma separated, trimmed,
    /// blanks dropped.
    pub fn keyword_list(&self) -> Vec<&str> {
        split_keywords(self.get(FormField::Keywords))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("FormState");
        for field in FormField::ALL {
            let value = self.get(field);
            if field.is_masked() {
                debug.field(field.wire_name(), &format_args!("<{} chars>", value.chars().count()));
            } else {
                debug.field(field.wire_name(), &value);
            }
        }
        debug.finish()
    }
}

/// Split a keyword string on commas, trimming entries and dropping blanks.
pub fn split_keywords(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .collect()
}
