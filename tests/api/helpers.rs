use std::collections::HashMap;

use once_cell::sync::Lazy;
use portfolio_contact::configuration::get_configuration;
use portfolio_contact::configuration::Settings;
use portfolio_contact::startup::Application;
use portfolio_contact::telemetry::get_subscriber;
use portfolio_contact::telemetry::init_subscriber;
use wiremock::MockServer;

/// Init the tracing subscriber once for the whole test binary.
///
/// To opt in to verbose logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    // `std::io::stdout` and `std::io::sink` are different types, hence the
    // duplicated arms
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber).expect("init tracing");
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber).expect("init tracing");
        }
    };
});

/// Path on the mock relay that the app is pointed at by default
pub const RELAY_PATH: &str = "/f/test-form";

pub struct TestApp {
    pub addr: String,
    /// `addr` plus the configured base path
    pub base_url: String,
    /// Stands in for the form relay
    pub relay_server: MockServer,
    pub owner_email: String,
    /// Redirects are not followed (we want to inspect `mailto:` locations),
    /// cookies are kept (flash messages)
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// `POST /contact` with an urlencoded body, as the browser would send it
    pub async fn post_contact(
        &self,
        body: &str,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/contact", self.base_url))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_owned())
            .send()
            .await
            .expect("execute request")
    }

    pub async fn get_contact(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/contact", self.base_url))
            .send()
            .await
            .expect("execute request")
    }

    pub async fn get_contact_html(&self) -> String { self.get_contact().await.text().await.unwrap() }
}

/// Spawn the app with the relay pointed at a fresh `MockServer`
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|cfg, relay| {
        cfg.contact.relay_endpoint = Some(format!("{}{RELAY_PATH}", relay.uri()));
    })
    .await
}

/// Spawn the app with no relay configured (pure `mailto:` mode). The mock relay
/// still runs, so tests can assert that it is never called.
pub async fn spawn_app_without_relay() -> TestApp {
    spawn_app_with(|cfg, _| cfg.contact.relay_endpoint = None).await
}

/// Load the default (local) config, bind to a random port, then let the
/// caller tweak the config before the app is built.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Settings, &MockServer)) -> TestApp {
    Lazy::force(&TRACING);

    let relay_server = MockServer::start().await;

    let cfg = {
        let mut cfg = get_configuration().expect("read configuration");
        // port 0: the OS assigns a random available port
        cfg.application.port = 0;
        configure(&mut cfg, &relay_server);
        cfg
    };

    let app = Application::build(cfg.clone())
        .await
        .expect("build application");
    let port = app.get_port();
    let addr = format!("http://localhost:{port}");
    let base_url = format!("{addr}{}", cfg.application.base_path.trim_end_matches('/'));
    tokio::spawn(app.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        addr,
        base_url,
        relay_server,
        owner_email: cfg.contact.owner_email,
        api_client,
    }
}

pub fn check_redirect(
    resp: &reqwest::Response,
    location: &str,
) {
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), location);
}

/// A `mailto:` redirect, split into recipient and decoded query params
pub struct Mailto {
    pub recipient: String,
    pub params: HashMap<String, String>,
}

/// Assert that `resp` hands off to the mail client, and decode the link
pub fn mailto_redirect(resp: &reqwest::Response) -> Mailto {
    assert_eq!(resp.status().as_u16(), 303);
    let location = resp
        .headers()
        .get("Location")
        .expect("no Location header")
        .to_str()
        .unwrap();

    let rest = location
        .strip_prefix("mailto:")
        .unwrap_or_else(|| panic!("not a mailto link: {location}"));
    let (recipient, query) = rest.split_once('?').unwrap();
    let params = query
        .split('&')
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap();
            (k.to_string(), urlencoding::decode(v).unwrap().into_owned())
        })
        .collect();

    Mailto {
        recipient: recipient.to_string(),
        params,
    }
}
