//! Discord bot integration for the service desk.
//!
//! The bot is the only part of the application that talks to Discord. It decodes
//! slash commands, select-menu choices and form submissions, hands them to the
//! services as plain values and renders the [`Reply`](crate::model::reply::Reply)
//! they return.
//!
//! # Gateway Intents
//!
//! Interactions are delivered regardless of intents, so only `GUILDS` is
//! requested. No privileged intent has to be enabled in the Developer Portal.

pub mod handler;
pub mod render;
pub mod start;
