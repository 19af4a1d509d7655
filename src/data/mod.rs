//! Database repository layer.
//!
//! Repositories wrap the `users` and `transactions` tables. They use SeaORM entity
//! models internally and return domain models from `crate::model`. Every repository
//! is generic over `ConnectionTrait` so the ledger can run several operations inside
//! one database transaction.

pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
