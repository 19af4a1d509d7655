use crate::{
    error::{config::ConfigError, AppError},
    model::user::ReverifyPolicy,
    service::roblox::ROBLOX_USERS_API_URL,
};

const DEFAULT_DATABASE_URL: &str = "sqlite://servicedesk.sqlite?mode=rwc";
const DEFAULT_SERVICE_NAME: &str = "Notruf Hamburg";

pub struct Config {
    pub discord_token: String,
    pub database_url: String,

    pub roblox_api_url: String,

    /// Shown in the footer of the service panel.
    pub service_name: String,
    pub reverify_policy: ReverifyPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            roblox_api_url: var_or("ROBLOX_USERS_API_URL", ROBLOX_USERS_API_URL),
            service_name: var_or("SERVICE_NAME", DEFAULT_SERVICE_NAME),
            reverify_policy: match std::env::var("REVERIFY_RESETS_BALANCE") {
                Ok(value) => reverify_policy("REVERIFY_RESETS_BALANCE", &value)?,
                Err(_) => ReverifyPolicy::default(),
            },
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn reverify_policy(name: &str, value: &str) -> Result<ReverifyPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(ReverifyPolicy::ResetBalance),
        "0" | "false" | "no" | "" => Ok(ReverifyPolicy::PreserveBalance),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reverify_flag() {
        assert_eq!(
            reverify_policy("REVERIFY_RESETS_BALANCE", "true").unwrap(),
            ReverifyPolicy::ResetBalance
        );
        assert_eq!(
            reverify_policy("REVERIFY_RESETS_BALANCE", " TRUE ").unwrap(),
            ReverifyPolicy::ResetBalance
        );
        assert_eq!(
            reverify_policy("REVERIFY_RESETS_BALANCE", "0").unwrap(),
            ReverifyPolicy::PreserveBalance
        );
    }

    #[test]
    fn rejects_unparsable_reverify_flag() {
        let err = reverify_policy("REVERIFY_RESETS_BALANCE", "sometimes").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { ref name, ref value }
                if name == "REVERIFY_RESETS_BALANCE" && value == "sometimes"
        ));
    }
}
