//! Domain Concerns

pub mod cabins;
