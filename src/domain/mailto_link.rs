use super::ContactSubmission;
use super::OwnerEmail;

/// `mailto:` URI that opens the visitor's mail client with the submission
/// pre-filled, addressed to the site owner.
///
/// `mailto:<owner>?subject=<subject>&body=<body>`, where subject and body are
/// percent-encoded, so `&`, `=`, `?`, `#` and newlines in user input can't
/// leak into the query structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink(String);

impl MailtoLink {
    pub fn new(
        owner: &OwnerEmail,
        submission: &ContactSubmission,
    ) -> Self {
        let subject = urlencoding::encode(&submission.mailto_subject()).into_owned();
        let body = urlencoding::encode(&submission.mailto_body()).into_owned();
        Self(format!(
            "mailto:{}?subject={subject}&body={body}",
            owner.as_ref()
        ))
    }
}

impl AsRef<str> for MailtoLink {
    fn as_ref(&self) -> &str { &self.0 }
}

impl std::fmt::Display for MailtoLink {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
