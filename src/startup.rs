use std::net::TcpListener;

use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::web::Data;
use actix_web::App;
use actix_web::HttpServer;
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::ExposeSecret;
use secrecy::Secret;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::contact::ContactHandler;
use crate::routes::contact_form;
use crate::routes::health_check;
use crate::routes::submit_contact;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener, build the contact handler, and wire up the server
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // with port 0, the OS picks one; tests need to know which
        let port = listener.local_addr()?.port();

        let handler = cfg.contact.handler().map_err(anyhow::Error::msg)?;
        match cfg.contact.relay_endpoint() {
            Some(endpoint) => tracing::info!(endpoint, "relaying contact submissions"),
            None => tracing::info!("no relay configured, contact submissions go to mailto"),
        }

        let server = run(
            listener,
            handler,
            cfg.application.base_path,
            cfg.application.flash_key,
            cfg.application.max_form_bytes,
        )?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// Prefix prepended to every route and in-site link (empty when served from
/// the domain root). Wrapped so it can't be confused with other `String`s in
/// `Data`.
pub struct AppBasePath(pub String);

/// The server is not responsible for binding to an address, it only listens to
/// an already bound address.
///
/// Declares all endpoints, scoped under `base_path`.
pub fn run(
    listener: TcpListener,
    handler: ContactHandler,
    base_path: String,
    flash_key: Secret<String>,
    max_form_bytes: usize,
) -> Result<Server, anyhow::Error> {
    // `Key::from` panics on fewer than 64 bytes
    let flash_key = flash_key.expose_secret().as_bytes();
    if flash_key.len() < 64 {
        anyhow::bail!("flash_key must be at least 64 bytes long");
    }
    let secret_key = Key::from(flash_key);

    let cookie_store = CookieMessageStore::builder(secret_key).build();
    let msg_framework = FlashMessagesFramework::builder(cookie_store).build();

    // `Data` is an `Arc` inside; every worker gets a clone of the same handler
    let handler = Data::new(handler);
    let base_path = Data::new(AppBasePath(base_path.trim_end_matches('/').to_string()));

    // the closure runs once per worker
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(msg_framework.clone())
            .service(
                web::scope(&base_path.0)
                    .route("/health_check", web::get().to(health_check))
                    .route("/contact", web::get().to(contact_form))
                    .route("/contact", web::post().to(submit_contact)),
            )
            .app_data(handler.clone())
            .app_data(base_path.clone())
            .app_data(web::FormConfig::default().limit(max_form_bytes))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
