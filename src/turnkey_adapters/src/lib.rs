pub mod config;
pub mod cryptography;
pub mod persistence;
