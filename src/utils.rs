use actix_web::http::header::LOCATION;
use actix_web::HttpResponse;

/// 303, so the browser follows up with a `GET` (or, for `mailto:`, opens the
/// mail client)
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// Print an error followed by every error in its `source` chain. Used for the
/// `Debug` impls of our error enums, so that `{:?}` in logs shows the root
/// cause instead of only the outermost message.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}
