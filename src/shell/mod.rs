// Composition root for the shifts service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store adapter and wire it into the use case handlers.
// - Spawn the projection worker that keeps the date index current.
// - Expose the REST router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
