use thiserror::Error;

/// Starboard rule violations reported back to the member who triggered them.
///
/// The display text of each variant is sent as the command reply, so it is
/// written for Discord users rather than for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StarboardError {
    #[error("You have already starred that message.")]
    AlreadyStarred,

    #[error("You haven't starred that message.")]
    NotStarred,

    #[error("The author of that message is blocked from the starboard.")]
    BlockedAuthor,

    #[error("You can't star that message.")]
    BlockedUser,

    #[error("That message is already hidden from the starboard.")]
    AlreadyHidden,

    #[error("That message isn't hidden from the starboard.")]
    NotHidden,

    #[error("Messages in that channel can't be starred.")]
    IgnoredChannel,

    #[error("I couldn't find that message.")]
    MessageNotFound,

    #[error("That message isn't in this server.")]
    ForeignMessage,

    #[error("The star threshold must be at least 1.")]
    InvalidMinStars,

    #[error("That is already ignored by the starboard.")]
    AlreadyIgnored,

    #[error("That isn't ignored by the starboard.")]
    NotIgnored,

    #[error("Starboard commands only work in a server.")]
    GuildOnly,

    /// The argument was neither a message link nor a message id.
    #[error("`{0}` is not a message link or ID.")]
    InvalidMessageReference(String),
}
