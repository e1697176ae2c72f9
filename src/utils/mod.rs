pub mod app_config;
pub mod app_error;
pub mod validated_query;
