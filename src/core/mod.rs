pub mod interfaces;
pub mod models;
pub mod monitor_resolver;
pub mod orchestrators;
pub mod pixel_normalizer;
