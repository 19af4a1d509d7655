//! Identifiers and metadata for the service panel's menu options and forms.
//!
//! Every member action exists twice on the Discord side: once as a select-menu
//! option on the panel and once as the modal form that option opens. Both ids are
//! derived from [`ServiceAction`] so the router and the renderer cannot drift apart.

/// Custom id of the select menu attached to the service panel.
pub const SERVICE_MENU_ID: &str = "service_menu";

/// Custom id of the username input on the verification form.
pub const USERNAME_INPUT_ID: &str = "username";

/// Custom id of the amount input on the ledger forms.
pub const AMOUNT_INPUT_ID: &str = "amount";

/// One of the member-facing services offered by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    /// Link a Roblox account to the member's Discord account.
    Verify,
    /// Add currency to the member's balance.
    Deposit,
    /// Take currency from the member's balance.
    Withdraw,
}

impl ServiceAction {
    /// All actions in the order they appear on the panel.
    pub const ALL: [ServiceAction; 3] = [Self::Verify, Self::Deposit, Self::Withdraw];

    /// Value of the select-menu option for this action.
    pub fn menu_value(self) -> &'static str {
        match self {
            Self::Verify => "identity_verify",
            Self::Deposit => "ledger_deposit",
            Self::Withdraw => "ledger_withdraw",
        }
    }

    /// Resolves a select-menu value back to its action.
    pub fn from_menu_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.menu_value() == value)
    }

    /// Custom id of the modal form opened by this action.
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Verify => "identity_verify_form",
            Self::Deposit => "ledger_deposit_form",
            Self::Withdraw => "ledger_withdraw_form",
        }
    }

    /// Resolves a submitted modal's custom id back to its action.
    pub fn from_form_id(custom_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.form_id() == custom_id)
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Verify => "Roblox verification",
            Self::Deposit => "Deposit money",
            Self::Withdraw => "Withdraw money",
        }
    }

    pub fn menu_description(self) -> &'static str {
        match self {
            Self::Verify => "Verify your Roblox account",
            Self::Deposit => "Deposit money into your account",
            Self::Withdraw => "Withdraw money from your account",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Verify => "🔗",
            Self::Deposit => "💰",
            Self::Withdraw => "💸",
        }
    }

    /// Title shown at the top of the modal form.
    pub fn form_title(self) -> String {
        format!("{} {}", self.emoji(), self.menu_label())
    }

    /// Custom id of the single text input on this action's form.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Verify => USERNAME_INPUT_ID,
            Self::Deposit | Self::Withdraw => AMOUNT_INPUT_ID,
        }
    }

    pub fn input_label(self) -> &'static str {
        match self {
            Self::Verify => "Roblox username",
            Self::Deposit | Self::Withdraw => "Amount (€)",
        }
    }

    pub fn input_placeholder(self) -> &'static str {
        match self {
            Self::Verify => "Enter your Roblox username...",
            Self::Deposit => "How much do you want to deposit?",
            Self::Withdraw => "How much do you want to withdraw?",
        }
    }

    /// Maximum number of characters accepted by the form input.
    ///
    /// Roblox usernames are at most 20 characters; amounts are capped at 10
    /// characters, which is the only upper bound on a single ledger operation.
    pub fn input_max_length(self) -> u16 {
        match self {
            Self::Verify => 20,
            Self::Deposit | Self::Withdraw => 10,
        }
    }

    /// Whether the action requires a verified user record.
    pub fn requires_verification(self) -> bool {
        !matches!(self, Self::Verify)
    }
}

/// The Discord member an interaction was issued by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Discord ID of the member
    pub discord_id: u64,
    /// Discord username of the member
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_values_resolve_to_actions() {
        assert_eq!(
            ServiceAction::from_menu_value("identity_verify"),
            Some(ServiceAction::Verify)
        );
        assert_eq!(
            ServiceAction::from_menu_value("ledger_deposit"),
            Some(ServiceAction::Deposit)
        );
        assert_eq!(
            ServiceAction::from_menu_value("ledger_withdraw"),
            Some(ServiceAction::Withdraw)
        );
        assert_eq!(ServiceAction::from_menu_value("bank_deposit"), None);
    }

    #[test]
    fn form_ids_do_not_collide_with_menu_values() {
        for action in ServiceAction::ALL {
            assert_eq!(ServiceAction::from_form_id(action.form_id()), Some(action));
            assert_eq!(ServiceAction::from_menu_value(action.form_id()), None);
        }
    }

    #[test]
    fn only_ledger_actions_require_verification() {
        assert!(!ServiceAction::Verify.requires_verification());
        assert!(ServiceAction::Deposit.requires_verification());
        assert!(ServiceAction::Withdraw.requires_verification());
    }
}
