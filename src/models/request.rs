use serde::{Deserialize, Serialize};
use std::fmt;

use super::form::{FormField, FormState};

/// JSON body of `POST /run-bot`: exactly the five form fields.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunBotRequest {
    pub linkedin_email: String,
    pub linkedin_password: String,
    pub user_email: String,
    pub email_password: String,
    pub keywords: String,
}

impl RunBotRequest {
    /// Snapshot the current form values.
    pub fn from_form(form: &FormState) -> Self {
        Self {
            linkedin_email: form.get(FormField::LinkedinEmail).to_string(),
            linkedin_password: form.get(FormField::LinkedinPassword).to_string(),
            user_email: form.get(FormField::UserEmail).to_string(),
            email_password: form.get(FormField::EmailPassword).to_string(),
            keywords: form.get(FormField::Keywords).to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&FormState> for RunBotRequest {
    fn from(form: &FormState) -> Self {
        Self::from_form(form)
    }
}

// Secrets stay out of logs
impl fmt::Debug for RunBotRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunBotRequest")
            .field("linkedin_email", &self.linkedin_email)
            .field("linkedin_password", &"<redacted>")
            .field("user_email", &self.user_email)
            .field("email_password", &"<redacted>")
            .field("keywords", &self.keywords)
            .finish()
    }
}
