// Module layout (Clean Architecture style)
// - bootstrap: configuration and service wiring
// - infrastructure: Postgres document store adapters
// - presentation: HTTP handlers and routing
// - application: ports, use cases, session tokens and the access gate
// - domain: job postings and applications

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub(crate) mod test_support;
