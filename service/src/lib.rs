pub mod app;
pub mod routes;
pub mod state;
