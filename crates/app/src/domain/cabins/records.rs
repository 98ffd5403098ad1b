//! Cabin Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Cabin Id, assigned by the record store on insert
pub type CabinId = TypedId<CabinRecord>;

/// Cabin Record
#[derive(Debug, Clone, PartialEq)]
pub struct CabinRecord {
    pub id: CabinId,
    pub created_at: Timestamp,
    pub name: String,
    pub max_capacity: u32,
    pub regular_price: Decimal,
    pub discount: Decimal,
    pub description: String,
    /// Public URL of the cabin photo in the blob store.
    pub image_path: String,
}
