//! Routed page components, one module per route table entry.

pub mod home;
pub mod login;
pub mod movie_detail;
pub mod movies;
pub mod my_page;
pub mod not_found;
pub mod register;
