pub mod config;
pub mod db;
pub mod models;
pub mod schema;
pub mod store;
pub mod service;
pub mod metrics;
pub mod api;
pub mod client;
