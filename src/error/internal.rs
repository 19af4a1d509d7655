use std::num::{ParseIntError, TryFromIntError};
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Discord IDs are stored as strings; a stored value that is not a valid
    /// snowflake indicates corrupted data.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Roblox ID does not fit the signed column it is stored in.
    #[error("Roblox ID {value} is out of range for storage: {source}")]
    RobloxIdOutOfRange {
        /// The ID that failed to convert
        value: u64,
        /// The underlying conversion error
        #[source]
        source: TryFromIntError,
    },

    /// Stored transaction kind is neither `deposit` nor `withdraw`.
    #[error("Unknown transaction kind '{0}'")]
    UnknownTransactionKind(String),
}
