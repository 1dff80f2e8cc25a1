use validator::ValidateEmail;

/// The site owner's address: the recipient of every `mailto:` handoff.
///
/// Parsed once at startup, so a typo in the configuration stops the server
/// instead of producing broken links. Visitor-supplied addresses are never
/// parsed with this; they are passed through as typed.
#[derive(Debug, Clone)]
pub struct OwnerEmail(String);

impl OwnerEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        let email = email.trim().to_string();
        // valid in a local part, but they would break the `mailto:` query
        let breaks_uri = email.contains(['?', '&', '=', '#', '%']);
        (!breaks_uri && ValidateEmail::validate_email(&email))
            .then_some(Self(email.clone()))
            .ok_or(format!("Invalid owner email: {email:?}"))
    }
}

impl AsRef<str> for OwnerEmail {
    fn as_ref(&self) -> &str { &self.0 }
}

impl std::fmt::Display for OwnerEmail {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
