pub mod actors;
pub mod advisor;
pub mod engine;
pub mod models;
pub mod records;
pub mod stats;
pub mod storage;
pub mod types;
