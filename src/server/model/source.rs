//! Snapshot of the original message a mirror is rendered from.

use serenity::all::{Message, Timestamp};

/// The parts of a source message the starboard renders.
///
/// Taken once when the message is first fetched and never refreshed, so later edits
/// to the source are not reflected in the mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMessage {
    pub author_name: String,
    pub author_avatar: String,
    pub content: String,
    /// First image, from an image attachment or an embed image/thumbnail.
    pub image_url: Option<String>,
    /// First attachment that isn't an image, as `(filename, url)`.
    pub attachment: Option<(String, String)>,
    /// Whether the message carried any attachment at all.
    pub has_attachments: bool,
    /// Whether any embed carried an image or thumbnail.
    pub has_embed_image: bool,
    pub timestamp: Timestamp,
}

impl SourceMessage {
    /// Takes a snapshot of a fetched Discord message.
    pub fn from_message(message: &Message) -> Self {
        let image_attachment = message
            .attachments
            .iter()
            .find(|attachment| attachment.width.is_some() && attachment.height.is_some())
            .map(|attachment| attachment.url.clone());

        let embed_image = message.embeds.iter().find_map(|embed| {
            embed
                .image
                .as_ref()
                .map(|image| image.url.clone())
                .or_else(|| embed.thumbnail.as_ref().map(|thumb| thumb.url.clone()))
        });

        let attachment = message
            .attachments
            .iter()
            .find(|attachment| attachment.width.is_none() || attachment.height.is_none())
            .map(|attachment| (attachment.filename.clone(), attachment.url.clone()));

        Self {
            author_name: message
                .author
                .global_name
                .clone()
                .unwrap_or_else(|| message.author.name.clone()),
            author_avatar: message.author.face(),
            content: message.content.clone(),
            has_embed_image: embed_image.is_some(),
            image_url: image_attachment.or(embed_image),
            attachment,
            has_attachments: !message.attachments.is_empty(),
            timestamp: message.timestamp,
        }
    }

    /// A message is displayable if it has text, an attachment or an embed image.
    pub fn is_displayable(&self) -> bool {
        !self.content.trim().is_empty() || self.has_attachments || self.has_embed_image
    }
}
