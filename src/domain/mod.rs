mod contact_submission;
mod mailto_link;
mod owner_email;
pub use contact_submission::ContactSubmission;
pub use mailto_link::MailtoLink;
pub use owner_email::OwnerEmail;
