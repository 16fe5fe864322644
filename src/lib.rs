//! Customer-support chatbot backend: registration, login, and a chat
//! endpoint that answers from a static FAQ table with a language-model
//! fallback.

pub mod app;
pub mod auth;
pub mod chat;
pub mod completion;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod users;
