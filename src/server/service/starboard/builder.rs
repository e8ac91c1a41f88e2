//! Mirror post rendering.

use serenity::all::{ChannelId, Colour, CreateEmbed, CreateEmbedAuthor, GuildId, MessageId};

use crate::server::model::{
    mirror::MirrorPost, settings::DEFAULT_EMOJI, source::SourceMessage,
    starboard_message::StarboardMessage,
};

/// Embed colour of mirror posts.
const MIRROR_COLOUR: Colour = Colour::new(0xffac33);

/// Picks the header emoji for a star count.
///
/// Guilds using the default star get a brighter star as the count grows, a custom
/// emoji is always shown as is.
///
/// # Arguments
/// - `stars` - Current star count
/// - `emoji` - Guild's configured star emoji
pub fn star_emoji(stars: usize, emoji: &str) -> &str {
    if emoji != DEFAULT_EMOJI {
        return emoji;
    }

    match stars {
        0..=4 => "⭐",
        5..=9 => "🌟",
        10..=24 => "💫",
        _ => "✨",
    }
}

/// Link that opens the source message in the Discord client.
pub fn jump_url(guild_id: GuildId, channel_id: ChannelId, message_id: MessageId) -> String {
    format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id, channel_id, message_id
    )
}

/// Renders the mirror of a tracked message.
///
/// # Arguments
/// - `guild_id` - Guild the source message belongs to
/// - `emoji` - Guild's configured star emoji
/// - `record` - Tracked message providing the star count and location
/// - `source` - Snapshot of the source message
///
/// # Returns
/// - `MirrorPost` - Header line and embed contents
pub fn build_mirror_post(
    guild_id: GuildId,
    emoji: &str,
    record: &StarboardMessage,
    source: &SourceMessage,
) -> MirrorPost {
    let stars = record.stars();

    MirrorPost {
        content: format!(
            "{} **{}** <#{}>",
            star_emoji(stars, emoji),
            stars,
            record.channel_id
        ),
        author_name: source.author_name.clone(),
        author_avatar: source.author_avatar.clone(),
        description: source.content.clone(),
        image_url: source.image_url.clone(),
        attachment: source.attachment.clone(),
        jump_url: jump_url(guild_id, record.channel_id, record.message_id),
        timestamp: source.timestamp,
    }
}

/// Converts a rendered mirror into a Serenity embed.
pub fn create_embed(post: &MirrorPost) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .author(CreateEmbedAuthor::new(&post.author_name).icon_url(&post.author_avatar))
        .colour(MIRROR_COLOUR)
        .timestamp(post.timestamp);

    if !post.description.is_empty() {
        embed = embed.description(&post.description);
    }

    if let Some(image_url) = &post.image_url {
        embed = embed.image(image_url);
    }

    if let Some((filename, url)) = &post.attachment {
        embed = embed.field("Attachment", format!("[{}]({})", filename, url), false);
    }

    embed.field(
        "Original",
        format!("[Jump to message]({})", post.jump_url),
        false,
    )
}
