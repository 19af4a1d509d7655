use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        roblox::RobloxUser,
        user::{ReverifyPolicy, VerifyUserParam, STARTING_BALANCE},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod decrement_balance_if_sufficient;
mod find_by_discord_id;
mod increment_balance;
mod upsert_verified;

fn verify_param(discord_id: u64, roblox_id: u64, roblox_name: &str) -> VerifyUserParam {
    VerifyUserParam {
        discord_id,
        discord_name: "member".to_string(),
        roblox: RobloxUser {
            id: roblox_id,
            name: roblox_name.to_string(),
        },
        starting_balance: STARTING_BALANCE,
        policy: ReverifyPolicy::PreserveBalance,
    }
}
