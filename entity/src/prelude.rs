pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
