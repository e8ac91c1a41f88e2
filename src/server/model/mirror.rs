use serenity::all::Timestamp;

/// Rendered contents of a mirror post.
///
/// Kept as plain data so rendering can be checked without going through Serenity's
/// builders. The gateway turns it into a message with one embed.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorPost {
    /// Header line above the embed, e.g. `⭐ **3** <#123>`.
    pub content: String,
    pub author_name: String,
    pub author_avatar: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Non-image attachment linked from the embed, as `(filename, url)`.
    pub attachment: Option<(String, String)>,
    pub jump_url: String,
    pub timestamp: Timestamp,
}
