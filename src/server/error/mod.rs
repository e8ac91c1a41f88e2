//! Error types for the starboard bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. User-facing starboard
//! errors are recovered by the command layer into a reply, Discord I/O errors are
//! classified by `GatewayError`, and everything else propagates up to the caller that
//! logs it.

pub mod config;
pub mod gateway;
pub mod internal;
pub mod starboard;

use thiserror::Error;

use crate::server::error::{
    config::ConfigError, gateway::GatewayError, internal::InternalError,
    starboard::StarboardError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// User-facing starboard rule violation.
    ///
    /// Commands turn these into a reply to the invoking member, reaction handlers
    /// log them at debug level.
    #[error(transparent)]
    StarboardErr(#[from] StarboardError),

    /// Discord I/O failure classified for the starboard.
    #[error(transparent)]
    GatewayErr(#[from] GatewayError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Unexpected internal failure, usually corrupt persisted data or a failed task.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
