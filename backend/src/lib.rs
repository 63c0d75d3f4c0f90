//! GameHub dashboard backend.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the credential
//! store, catalogs, session state and view router; [`inbound::http`] adapts
//! them to actix-web handlers; [`startup`] wires both from
//! [`settings::ServerSettings`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;
pub mod startup;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
