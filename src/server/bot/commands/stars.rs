//! Starboard moderation commands.

use serenity::all::User;

use crate::server::{
    bot::commands::{guild_starboard, resolve_message, Context},
    error::AppError,
    service::starboard::builder::jump_url,
};

/// Moderate starred messages and starboard members.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    subcommands("hide", "unhide", "block", "unblock", "info")
)]
pub async fn stars(_: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Keep a message off the starboard regardless of its stars.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn hide(
    ctx: Context<'_>,
    #[description = "Message link or ID"] message: String,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;
    let (channel_id, message_id) = resolve_message(ctx, &message)?;

    starboard.hide(message_id, Some(channel_id)).await?;

    ctx.say("That message is now hidden from the starboard.")
        .await?;

    Ok(())
}

/// Let a hidden message back onto the starboard.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn unhide(
    ctx: Context<'_>,
    #[description = "Message link or ID"] message: String,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;
    let (channel_id, message_id) = resolve_message(ctx, &message)?;

    starboard.unhide(message_id, Some(channel_id)).await?;

    ctx.say("That message can appear on the starboard again.")
        .await?;

    Ok(())
}

/// Block a member from starring and from being starred.
///
/// Stars the member already gave are kept.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn block(
    ctx: Context<'_>,
    #[description = "Member to block"] member: User,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;

    starboard.block(member.id).await?;

    ctx.say(format!("{} is now blocked from the starboard.", member.name))
        .await?;

    Ok(())
}

/// Let a blocked member use the starboard again.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn unblock(
    ctx: Context<'_>,
    #[description = "Member to unblock"] member: User,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;

    starboard.unblock(member.id).await?;

    ctx.say(format!("{} can use the starboard again.", member.name))
        .await?;

    Ok(())
}

/// Show the starboard state of a message.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn info(
    ctx: Context<'_>,
    #[description = "Message link or ID"] message: String,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;
    let (_, message_id) = resolve_message(ctx, &message)?;

    let Some(record) = starboard.get_or_load(message_id, None, false).await? else {
        ctx.say("That message has never been starred.").await?;
        return Ok(());
    };

    let mirror = match record.mirror {
        Some(mirror) => jump_url(starboard.guild_id(), mirror.channel_id, mirror.message_id),
        None => "none".to_string(),
    };
    let reply = format!(
        "**{}** stars on a message by <@{}>\nHidden: {}\nMirror: {}",
        record.stars(),
        record.author_id,
        if record.hidden { "yes" } else { "no" },
        mirror
    );

    ctx.say(reply).await?;

    Ok(())
}
