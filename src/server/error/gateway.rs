use serenity::http::HttpError;
use thiserror::Error;

/// Outcome classification for Discord requests made on behalf of the starboard.
///
/// The synchronizer reacts differently to a missing message (corrects local state)
/// and a missing permission (logged and skipped), so both are split out of the
/// generic Serenity error.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The message or channel no longer exists.
    #[error("Discord resource not found")]
    NotFound,

    /// The bot lacks permission for the request.
    #[error("Missing permissions for Discord request")]
    Forbidden,

    /// Any other Discord failure.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(Box<serenity::Error>),
}

impl From<serenity::Error> for GatewayError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(ref response)) = err {
            match response.status_code.as_u16() {
                404 => return GatewayError::NotFound,
                403 => return GatewayError::Forbidden,
                _ => {}
            }
        }

        GatewayError::Discord(Box::new(err))
    }
}
