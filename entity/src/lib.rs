//! SeaORM entities for the service desk store.

pub mod prelude;

pub mod transaction;
pub mod user;
