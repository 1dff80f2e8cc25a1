use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use htmlescape::encode_minimal;

use crate::contact::ContactHandler;
use crate::startup::AppBasePath;

/// `GET /contact`
///
/// The contact form, plus the owner's address as a plain `mailto:` link for
/// visitors who prefer their own mail client. After a successful relay
/// delivery, the acknowledgment arrives here as a flash message and the form
/// is rendered empty.
pub async fn contact_form(
    flash_messages: IncomingFlashMessages,
    handler: web::Data<ContactHandler>,
    base_path: web::Data<AppBasePath>,
) -> HttpResponse {
    let mut notice = String::new();
    for msg in flash_messages.iter() {
        // escape first, otherwise the inserted <br> would be escaped too
        let content = encode_minimal(msg.content()).replace('\n', "<br>\n");
        notice.push_str(&format!(
            "<p class=\"notice\" role=\"status\">{content}</p>\n"
        ))
    }

    let owner = encode_minimal(handler.owner().as_ref());
    let action = encode_minimal(&format!("{}/contact", base_path.0));

    let body = format!(
        r#"
<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <title>Contact</title>
  </head>
  <body>
    <h1>Let's Connect</h1>
    <p>Email: <a href="mailto:{owner}">{owner}</a></p>
    {notice}
    <form action="{action}" method="post">
      <label>
        Name
        <input type="text" placeholder="Your name" name="name" required />
      </label>
      <label>
        Email
        <input type="email" placeholder="your@email.com" name="email" required />
      </label>
      <label>
        Message
        <textarea rows="6" placeholder="Tell me about your project..." name="message" required></textarea>
      </label>
      <button type="submit">Send Message</button>
    </form>
  </body>
</html>
    "#
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
