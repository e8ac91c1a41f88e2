//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Values used to build a test message.
///
/// Only the fields the starboard reads are configurable, everything else is filled with
/// defaults Discord would send for a plain text message.
#[derive(Clone, Debug)]
pub struct TestMessage<'a> {
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    pub author_id: u64,
    pub author_name: &'a str,
    pub author_bot: bool,
    pub content: &'a str,
    /// Image attachment URLs, each becomes an attachment named after its last path segment.
    pub attachments: Vec<&'a str>,
    /// Non-image attachment URLs, sent without dimensions.
    pub files: Vec<&'a str>,
    /// Image URLs, each becomes a rich embed carrying that image.
    pub embed_images: Vec<&'a str>,
}

impl<'a> TestMessage<'a> {
    /// Creates message values with empty content and no attachments.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID
    /// - `channel_id` - Channel the message was posted in
    /// - `guild_id` - Guild the channel belongs to
    /// - `author_id` - Discord user ID of the author
    pub fn new(message_id: u64, channel_id: u64, guild_id: u64, author_id: u64) -> Self {
        Self {
            message_id,
            channel_id,
            guild_id,
            author_id,
            author_name: "author",
            author_bot: false,
            content: "",
            attachments: Vec::new(),
            files: Vec::new(),
            embed_images: Vec::new(),
        }
    }
}

/// Creates a test Serenity Message from the given values.
///
/// # Arguments
/// - `values` - Configurable message fields
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(values: TestMessage<'_>) -> Message {
    let images = values.attachments.iter().map(|url| (url, true));
    let files = values.files.iter().map(|url| (url, false));
    let attachments: Vec<serde_json::Value> = images
        .chain(files)
        .enumerate()
        .map(|(index, (url, image))| {
            let filename = url.rsplit('/').next().unwrap_or("file");
            let mut attachment = serde_json::json!({
                "id": (values.message_id + 1 + index as u64).to_string(),
                "filename": filename,
                "size": 1024,
                "url": url,
                "proxy_url": url,
            });
            if image {
                attachment["height"] = serde_json::json!(100);
                attachment["width"] = serde_json::json!(100);
                attachment["content_type"] = serde_json::json!("image/png");
            }
            attachment
        })
        .collect();

    let embeds: Vec<serde_json::Value> = values
        .embed_images
        .iter()
        .map(|url| {
            serde_json::json!({
                "type": "rich",
                "image": { "url": url },
                "fields": [],
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": values.message_id.to_string(),
        "channel_id": values.channel_id.to_string(),
        "guild_id": values.guild_id.to_string(),
        "author": {
            "id": values.author_id.to_string(),
            "username": values.author_name,
            "global_name": values.author_name,
            "discriminator": "0",
            "avatar": null,
            "bot": values.author_bot,
        },
        "content": values.content,
        "timestamp": "2026-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": attachments,
        "embeds": embeds,
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message")
}
