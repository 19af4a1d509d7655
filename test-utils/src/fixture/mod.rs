//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They are used
//! for unit tests of entity conversions and as defaults for the factories.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let rich = fixture::user::entity_builder().balance(1_000_000).build();
//! ```

pub mod user;
