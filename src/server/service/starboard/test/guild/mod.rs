use super::*;
use crate::server::{
    error::starboard::StarboardError,
    model::settings::IgnoreTarget,
};

mod clear_stars;
mod enqueue;
mod flush_queue;
mod hide;
mod purge_cache;
mod remove_star;
mod settings;
