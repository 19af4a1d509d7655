//! Factory methods for inserting test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .discord_id("123456789")
//!     .balance(6500)
//!     .build()
//!     .await?;
//!
//! factory::transaction::create_transaction(&db, &user.discord_id, "deposit", 1500).await?;
//! ```

pub mod helpers;
pub mod transaction;
pub mod user;

pub use transaction::create_transaction;
pub use user::create_user;
