//! Starboard configuration commands.

use serenity::all::{GuildChannel, User};

use crate::server::{
    bot::commands::{guild_starboard, Context},
    data::starboard_message::StarboardMessageRepository,
    error::AppError,
    model::settings::IgnoreTarget,
};

/// Configure the starboard for this server.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    subcommands(
        "channel",
        "min_stars",
        "selfstar",
        "emoji",
        "ignore",
        "unignore",
        "status"
    )
)]
pub async fn starboard(_: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Set the channel mirrors are posted to, or leave it empty to stop posting.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn channel(
    ctx: Context<'_>,
    #[description = "Starboard channel"] channel: Option<GuildChannel>,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;

    starboard.set_channel(channel.as_ref().map(|c| c.id)).await?;

    let reply = match channel {
        Some(channel) => format!("Starred messages will be posted in <#{}>.", channel.id),
        None => "The starboard is disabled, stars are still counted.".to_string(),
    };
    ctx.say(reply).await?;

    Ok(())
}

/// Set how many stars a message needs to reach the starboard.
#[poise::command(slash_command, prefix_command, guild_only, rename = "stars")]
pub async fn min_stars(
    ctx: Context<'_>,
    #[description = "Stars needed, at least 1"] count: u32,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;

    starboard.set_min_stars(count).await?;

    ctx.say(format!("Messages now need {} stars.", count)).await?;

    Ok(())
}

/// Allow or forbid members to star their own messages.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn selfstar(
    ctx: Context<'_>,
    #[description = "Whether self-starring is allowed"] allowed: bool,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;

    starboard.set_allow_selfstar(allowed).await?;

    let reply = if allowed {
        "Members can now star their own messages."
    } else {
        "Members can no longer star their own messages."
    };
    ctx.say(reply).await?;

    Ok(())
}

/// Set the reaction that counts as a star.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn emoji(
    ctx: Context<'_>,
    #[description = "Unicode or custom emoji"] emoji: String,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;
    let emoji = emoji.trim().to_string();

    starboard.set_emoji(emoji.clone()).await?;

    ctx.say(format!("{} now counts as a star.", emoji)).await?;

    Ok(())
}

/// Ignore a member or channel, or list what is ignored.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn ignore(
    ctx: Context<'_>,
    #[description = "Member to ignore"] member: Option<User>,
    #[description = "Channel to ignore"] channel: Option<GuildChannel>,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;

    if member.is_none() && channel.is_none() {
        let settings = starboard.settings().await;
        let members: Vec<String> = settings
            .ignored_members
            .iter()
            .map(|id| format!("<@{}>", id))
            .collect();
        let channels: Vec<String> = settings
            .ignored_channels
            .iter()
            .map(|id| format!("<#{}>", id))
            .collect();

        ctx.say(format!(
            "Ignored members: {}\nIgnored channels: {}",
            list_or_none(&members),
            list_or_none(&channels)
        ))
        .await?;
        return Ok(());
    }

    if let Some(member) = &member {
        starboard.ignore(IgnoreTarget::member(member.id)).await?;
    }
    if let Some(channel) = &channel {
        starboard.ignore(IgnoreTarget::Channel(channel.id)).await?;
    }

    ctx.say("Now ignored by the starboard.").await?;

    Ok(())
}

/// Stop ignoring a member or channel.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn unignore(
    ctx: Context<'_>,
    #[description = "Member to stop ignoring"] member: Option<User>,
    #[description = "Channel to stop ignoring"] channel: Option<GuildChannel>,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;

    if member.is_none() && channel.is_none() {
        ctx.say("Give a member or a channel to stop ignoring.").await?;
        return Ok(());
    }

    if let Some(member) = &member {
        starboard.unignore(IgnoreTarget::member(member.id)).await?;
    }
    if let Some(channel) = &channel {
        starboard.unignore(IgnoreTarget::Channel(channel.id)).await?;
    }

    ctx.say("No longer ignored by the starboard.").await?;

    Ok(())
}

/// Show the starboard settings and activity of this server.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn status(ctx: Context<'_>) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;
    let settings = starboard.settings().await;
    let (tracked, mirrored) = StarboardMessageRepository::new(&ctx.data().db)
        .count_by_guild(starboard.guild_id())
        .await?;

    let channel = match settings.channel_id {
        Some(id) => format!("<#{}>", id),
        None => "not set".to_string(),
    };
    let reply = format!(
        "Channel: {}\nStars needed: {} {}\nSelf-starring: {}\n\
         Tracked messages: {} ({} on the starboard)\n\
         Queued updates: {}, cached messages: {}\nJanitor: {:?}",
        channel,
        settings.min_stars,
        settings.emoji,
        if settings.allow_selfstar { "allowed" } else { "not allowed" },
        tracked,
        mirrored,
        starboard.queue_len().await,
        starboard.cache_len().await,
        starboard.janitor_status().await
    );
    ctx.say(reply).await?;

    Ok(())
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
