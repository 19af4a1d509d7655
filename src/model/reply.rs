//! Render instructions returned by every interaction handler.
//!
//! Handlers never talk to Discord themselves. They return a [`Reply`] describing
//! what the member should see, and `bot::render` turns it into Serenity builders.

use crate::model::interaction::ServiceAction;

/// Embed color for successful operations.
pub const COLOR_SUCCESS: u32 = 0x00ff00;
/// Embed color for rejected or failed operations.
pub const COLOR_ERROR: u32 = 0xff0000;
/// Embed color for the service panel.
pub const COLOR_PANEL: u32 = 0x0099ff;

/// What to show the member in response to an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A message with a single embed.
    Notice(Notice),
    /// The service panel: an embed with the service select menu attached.
    Panel(Notice),
    /// Open the modal form belonging to the action.
    Form(ServiceAction),
}

/// A single embed plus its visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<NoticeField>,
    pub thumbnail: Option<String>,
    pub footer: Option<String>,
    /// Whether only the acting member can see the message.
    pub ephemeral: bool,
}

/// A name/value field rendered inside the embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Notice {
    fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            fields: Vec::new(),
            thumbnail: None,
            footer: None,
            ephemeral: true,
        }
    }

    /// Ephemeral rejection shown only to the acting member.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, COLOR_ERROR)
    }

    /// Ephemeral confirmation; call [`Notice::public`] to show it to the channel.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, COLOR_SUCCESS)
    }

    /// Public panel embed.
    pub fn panel(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, COLOR_PANEL).public()
    }

    pub fn public(mut self) -> Self {
        self.ephemeral = false;
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(NoticeField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}

impl Reply {
    /// Returns the notice carried by this reply, if any.
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Notice(notice) | Self::Panel(notice) => Some(notice),
            Self::Form(_) => None,
        }
    }
}
