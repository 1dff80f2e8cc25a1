use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;
use serde::Deserialize;

use crate::contact::ContactHandler;
use crate::contact::DeliveryOutcome;
use crate::domain::ContactSubmission;
use crate::startup::AppBasePath;
use crate::utils::redirect;

/// Shown once, on the next `GET /contact`, after the relay accepted a message
pub const ACKNOWLEDGMENT: &str = "🎉 Thank you for your message!\n\nI have received your request and will get back to you as soon as possible.\n\nTalk soon!";

/// Raw form fields. All optional: a missing field is not a 400, it becomes an
/// empty string.
#[derive(Deserialize)]
pub struct ContactFormData {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl From<ContactFormData> for ContactSubmission {
    fn from(value: ContactFormData) -> Self { Self::from_fields(value.name, value.email, value.message) }
}

/// `POST /contact`
///
/// Never fails from the visitor's point of view:
///
/// - relay accepted: flash the acknowledgment, 303 back to an empty form
/// - anything else: 303 to a pre-filled `mailto:` link, which hands the
///   message off to the visitor's mail client
///
/// # Request example
///
/// ```sh
///     curl -v --data 'name=Ada&email=ada%40example.com&message=Hello' http://127.0.0.1:8000/contact
/// ```
pub async fn submit_contact(
    form: web::Form<ContactFormData>,
    handler: web::Data<ContactHandler>,
    base_path: web::Data<AppBasePath>,
) -> HttpResponse {
    let submission: ContactSubmission = form.0.into();

    match handler.handle(&submission).await {
        DeliveryOutcome::Succeeded => {
            FlashMessage::success(ACKNOWLEDGMENT).send();
            redirect(&format!("{}/contact", base_path.0))
        }
        DeliveryOutcome::Degraded(mailto) => redirect(mailto.as_ref()),
    }
}
