//! Cabins

pub mod data;
pub mod errors;
pub mod images;
pub mod records;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::CabinsServiceError;
pub use service::*;
