//! Shared view components.

pub mod movie_card;
pub mod nav_bar;
