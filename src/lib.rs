//! Echo Chat Library
//!
//! A minimal native chat window. The [`chat`] module holds the
//! toolkit-independent model; [`gui`] renders it with GPUI.

pub mod chat;
pub mod config;
pub mod runner;

#[cfg(feature = "gui")]
pub mod gui;
