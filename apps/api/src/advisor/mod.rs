//! Guidance flows — quiz → recommendations, recommendation → career path,
//! and the Sahayak AI chat — plus the per-session state they live in.

pub mod chat;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod paths;
pub mod prompts;
pub mod questions;
pub mod quiz;
pub mod session;
