//! Synthetic bank-client generation, JSON persistence and low-balance reporting.

pub mod app;
pub mod generator;
pub mod models;
pub mod report;
pub mod storage;
pub mod types;
