mod transaction;
mod user;
