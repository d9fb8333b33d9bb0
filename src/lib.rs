//! Backend for the YouTube thumbnail, profile picture and banner download
//! tools: URL parsing, thumbnail links and UI language preferences.

pub mod config;
pub mod i18n;
pub mod locale;
pub mod routes;
pub mod server;
pub mod storage;
pub mod youtube;
