use crate::server::{
    bot::commands::{guild_starboard, resolve_message, Context},
    error::AppError,
};

/// Star a message without reacting to it.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn star(
    ctx: Context<'_>,
    #[description = "Message link or ID"] message: String,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;
    let (channel_id, message_id) = resolve_message(ctx, &message)?;
    let author = ctx.author();

    let record = starboard
        .add_star(message_id, Some(channel_id), author.id, author.bot)
        .await?;

    ctx.say(format!("Starred! That message now has {} stars.", record.stars()))
        .await?;

    Ok(())
}

/// Withdraw your star from a message.
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn unstar(
    ctx: Context<'_>,
    #[description = "Message link or ID"] message: String,
) -> Result<(), AppError> {
    let starboard = guild_starboard(ctx).await?;
    let (channel_id, message_id) = resolve_message(ctx, &message)?;
    let author = ctx.author();

    let record = starboard
        .remove_star(message_id, Some(channel_id), author.id, author.bot)
        .await?;

    ctx.say(format!("Unstarred. That message now has {} stars.", record.stars()))
        .await?;

    Ok(())
}
