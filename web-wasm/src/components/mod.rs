//! UIコンポーネント

pub mod animated_text;
pub mod header;
pub mod health_badge;
pub mod loading_animation;
pub mod score_dashboard;
pub mod toast;
pub mod upload_area;
