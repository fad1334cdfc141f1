pub mod app;
pub mod resources;
pub mod routes;
