pub mod config;
pub mod dataset;
pub mod errors;
pub mod llm_client;
pub mod poetry;
pub mod routes;
pub mod state;
