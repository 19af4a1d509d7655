use crate::{
    data::transaction::TransactionRepository,
    error::AppError,
    model::transaction::{CreateTransactionParam, TransactionKind},
};
use sea_orm::EntityTrait;
use test_utils::builder::TestBuilder;

mod create;
