//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data boundary;
//! services and the bot adapter never see entity types directly.

pub mod interaction;
pub mod reply;
pub mod roblox;
pub mod transaction;
pub mod user;
