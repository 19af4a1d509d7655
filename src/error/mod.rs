//! Error types and user-facing error rendering.
//!
//! `AppError` is the top-level error type. Handlers return it with `?` and the bot
//! adapter converts whatever escapes into a generic ephemeral notice through
//! [`AppError::into_reply`], logging the detail server-side.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::{
    error::{config::ConfigError, internal::InternalError},
    model::reply::{Notice, Reply},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` so repositories, services and startup code can
/// propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Stored data that violates an assumption of the codebase.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts an unhandled error into the reply shown to the acting member.
    ///
    /// The full error is logged; the member only sees a generic ephemeral notice so
    /// no storage or upstream details leak into the channel.
    ///
    /// # Returns
    /// - `Reply::Notice` - Ephemeral "something went wrong" notice
    pub fn into_reply(self) -> Reply {
        tracing::error!("{}", self);

        Reply::Notice(Notice::error(
            "❌ Something went wrong",
            "Your request could not be processed. Please try again later.",
        ))
    }
}
