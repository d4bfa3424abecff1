pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod icons;
