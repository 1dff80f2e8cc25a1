pub mod configuration;
pub mod contact;
pub mod domain;
pub mod relay_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
