pub mod app;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod logging;
pub mod rest;
pub mod storage;
pub mod types;
