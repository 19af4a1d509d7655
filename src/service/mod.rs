//! Interaction handlers.
//!
//! Each service is a thin orchestration over the repositories and the identity
//! lookup. Services take the acting member's id plus the raw input and return a
//! [`Reply`](crate::model::reply::Reply) for the bot adapter to render; they never
//! call Discord themselves.

pub mod gate;
pub mod ledger;
pub mod menu;
pub mod panel;
pub mod roblox;
pub mod verification;

#[cfg(test)]
mod test;
