//! Background tasks.

pub mod janitor;
