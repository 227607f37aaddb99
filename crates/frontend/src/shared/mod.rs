pub mod api_utils;
pub mod config;
pub mod dialog;
pub mod icons;
pub mod notice;
