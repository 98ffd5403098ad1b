//! Cabin administration: form validation and cabin records with their photos.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod logging;
pub mod storage;

#[cfg(test)]
mod test;
