//! Service desk panel posted by the `/setup` command.

use crate::model::reply::{Notice, Reply};

/// Builds the reply to `/setup`.
///
/// Administrators get the public service panel; everybody else gets an ephemeral
/// permission error and nothing is posted.
///
/// # Arguments
/// - `is_admin` - Whether the invoking member holds the administrator permission
/// - `service_name` - Community name shown in the title and footer
/// - `year` - Year shown in the footer
pub fn setup_panel(is_admin: bool, service_name: &str, year: i32) -> Reply {
    if !is_admin {
        return Reply::Notice(Notice::error(
            "❌ Missing permissions",
            "You need administrator permissions to set up the service desk!",
        ));
    }

    let description = format!(
        "**Welcome to the {} bot!**\n\n\
         You can use the following services here:\n\n\
         🔗 **Roblox verification**\n\
         Link your Discord account with your Roblox account\n\n\
         💰 **Bank services**\n\
         • Deposit money\n\
         • Withdraw money\n\n\
         **Choose an option below:**",
        service_name
    );

    Reply::Panel(
        Notice::panel(format!("🏢 {} - Service Center", service_name), description)
            .footer(format!("{} © {}", service_name, year)),
    )
}
