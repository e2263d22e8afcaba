pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
