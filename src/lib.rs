//! ATS Score CLI
//!
//! 解析APIクライアント・フロー駆動・ターミナル表示

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod progress;
pub mod render;
pub mod session;
