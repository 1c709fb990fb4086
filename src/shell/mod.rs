// Composition root for the time clock service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store, clock and identity resolver.
// - Wire them into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod identity;
pub mod state;
