pub mod commands;
pub mod models;
pub mod repository;
pub mod service;
