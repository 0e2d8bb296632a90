pub mod activities;
pub mod config;
pub mod errors;
pub mod orquestrator;
pub mod service;
pub mod state;
