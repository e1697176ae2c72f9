pub mod app;
mod routes;
pub mod services;
pub mod types;
pub mod utils;
