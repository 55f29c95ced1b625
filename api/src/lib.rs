// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup wiring
// - infrastructure: Postgres adapters
// - presentation: HTTP handlers and routing
// - application: use cases, ports and access policies
// - domain: core models and validation

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
