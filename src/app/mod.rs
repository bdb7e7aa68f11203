//! Core application logic: state, named view actions, event handling, and
//! action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod pagination;
pub mod reducer;
pub mod state;
