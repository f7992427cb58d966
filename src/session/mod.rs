//! Session state and lifecycle.
//!
//! DESIGN
//! ======
//! The session is an explicitly constructed `SessionState` provided to the
//! component tree as an `RwSignal` context — never ambient global state.
//! Only the functions in [`lifecycle`] mutate it, and they do so through a
//! `&mut` borrow: the UI takes a snapshot, awaits the operation, and
//! publishes the finished state with a single signal write.

pub mod lifecycle;
pub mod state;
pub mod tokens;
