//! Invoice entry pad: a four-section form with an upload gate, submit-time
//! validation and a durable key-value store underneath.

pub mod cli;
pub mod commands;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
