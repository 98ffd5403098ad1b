//! Cabin Data

use std::fmt::{Debug, Formatter, Result as FmtResult};

use rust_decimal::Decimal;

/// Cabin photo as submitted by the user.
#[derive(Clone, PartialEq)]
pub struct CabinImage {
    /// Original file name, possibly including directories.
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Debug for CabinImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CabinImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Raw cabin form values, exactly as entered.
///
/// Numeric fields are kept as text so the validator can tell an empty field
/// apart from an out of range one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CabinForm {
    pub name: String,
    pub max_capacity: String,
    pub regular_price: String,
    pub discount: String,
    pub description: String,
    pub image: Option<CabinImage>,
}

/// Validated cabin submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinInput {
    pub name: String,
    pub max_capacity: u32,
    pub regular_price: Decimal,
    pub discount: Decimal,
    pub description: String,
    pub image: CabinImage,
}

/// New Cabin Data, as inserted into the record store
#[derive(Debug, Clone, PartialEq)]
pub struct NewCabin {
    pub name: String,
    pub max_capacity: u32,
    pub regular_price: Decimal,
    pub discount: Decimal,
    pub description: String,
    pub image_path: String,
}

impl NewCabin {
    /// Builds the insert payload, replacing the photo with its public URL.
    #[must_use]
    pub fn from_input(input: &CabinInput, image_path: String) -> Self {
        Self {
            name: input.name.clone(),
            max_capacity: input.max_capacity,
            regular_price: input.regular_price,
            discount: input.discount,
            description: input.description.clone(),
            image_path,
        }
    }
}
