// Composition root.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the store and clock.
// - Wire them into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
