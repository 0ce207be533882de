pub mod campaign;
pub mod graphql;
pub mod logging;
