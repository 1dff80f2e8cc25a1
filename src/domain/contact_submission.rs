/// One contact form submission, as typed by the visitor.
///
/// Nothing is validated here: the form's `required`/`type=email` attributes
/// are the only checks, and a missing field is simply an empty string. A
/// submission lives for exactly one delivery attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from possibly missing fields, substituting `""` for
    /// any that are absent.
    pub fn from_fields(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }

    /// `_subject` field sent to the relay. An empty name is shown as
    /// `Anonymous` in the owner's inbox.
    pub fn relay_subject(&self) -> String {
        let name = match self.name.as_str() {
            "" => "Anonymous",
            name => name,
        };
        format!("Message from {name} - Portfolio Contact")
    }

    /// Subject of the `mailto:` fallback; uses the name verbatim
    pub fn mailto_subject(&self) -> String { format!("Message from {} - Portfolio Contact", self.name) }

    /// Body of the `mailto:` fallback
    pub fn mailto_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}
