// Composition root: configuration, application state, HTTP router and
// GraphQL schema. The binary in main.rs wires them to real adapters.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
