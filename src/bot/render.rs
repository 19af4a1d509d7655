//! Conversion of [`Reply`] render instructions into Serenity builders.

use serenity::all::{
    CreateActionRow, CreateEmbed, CreateEmbedFooter, CreateInputText, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateModal,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, InputTextStyle, ReactionType,
};

use crate::model::{
    interaction::{ServiceAction, SERVICE_MENU_ID},
    reply::{Notice, Reply},
};

/// Builds the initial interaction response for a reply.
pub fn response(reply: Reply) -> CreateInteractionResponse {
    match reply {
        Reply::Notice(notice) => CreateInteractionResponse::Message(message(&notice)),
        Reply::Panel(notice) => CreateInteractionResponse::Message(
            message(&notice).components(vec![service_menu()]),
        ),
        Reply::Form(action) => CreateInteractionResponse::Modal(form(action)),
    }
}

/// Builds a followup message for an interaction that was already acknowledged.
pub fn followup(notice: &Notice) -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .embed(embed(notice))
        .ephemeral(notice.ephemeral)
}

fn message(notice: &Notice) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(embed(notice))
        .ephemeral(notice.ephemeral)
}

fn embed(notice: &Notice) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&notice.title)
        .description(&notice.description)
        .color(notice.color);

    for field in &notice.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(url) = &notice.thumbnail {
        embed = embed.thumbnail(url);
    }
    if let Some(text) = &notice.footer {
        embed = embed.footer(CreateEmbedFooter::new(text));
    }

    embed
}

/// Select menu offering every service action.
fn service_menu() -> CreateActionRow {
    let options = ServiceAction::ALL
        .into_iter()
        .map(|action| {
            CreateSelectMenuOption::new(action.menu_label(), action.menu_value())
                .description(action.menu_description())
                .emoji(ReactionType::Unicode(action.emoji().to_string()))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(SERVICE_MENU_ID, CreateSelectMenuKind::String { options })
            .placeholder("Choose a service..."),
    )
}

fn form(action: ServiceAction) -> CreateModal {
    let input = CreateInputText::new(
        InputTextStyle::Short,
        action.input_label(),
        action.input_id(),
    )
    .placeholder(action.input_placeholder())
    .min_length(1)
    .max_length(action.input_max_length())
    .required(true);

    CreateModal::new(action.form_id(), action.form_title())
        .components(vec![CreateActionRow::InputText(input)])
}
