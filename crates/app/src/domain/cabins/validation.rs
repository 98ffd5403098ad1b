//! Cabin form validation.
//!
//! Validation is pure: it looks only at the values currently entered in the
//! form and never touches a store.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::cabins::data::{CabinForm, CabinInput};

pub const REQUIRED: &str = "This field is required";
pub const NOT_A_NUMBER: &str = "This field should be a number";
pub const CAPACITY_TOO_SMALL: &str = "Capacity should be at least 1";
pub const CAPACITY_NOT_WHOLE: &str = "Capacity should be a whole number";
pub const CAPACITY_TOO_LARGE: &str = "Capacity is too large";
pub const PRICE_TOO_SMALL: &str = "Price should be at least 1";
pub const DISCOUNT_ABOVE_PRICE: &str = "Discount should be less than Regular price";

/// Cabin form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CabinField {
    Name,
    MaxCapacity,
    RegularPrice,
    Discount,
    Description,
    Image,
}

impl CabinField {
    /// Field name as the form refers to it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::MaxCapacity => "maxCapacity",
            Self::RegularPrice => "regularPrice",
            Self::Discount => "discount",
            Self::Description => "description",
            Self::Image => "image",
        }
    }
}

impl Display for CabinField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: CabinField,
    pub message: &'static str,
}

/// Field-level messages for a rejected form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("cabin form has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: SmallVec<[FieldError; 6]>,
}

impl ValidationErrors {
    fn push(&mut self, field: CabinField, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message reported for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: CabinField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// Validates the entered form values, producing a normalized [`CabinInput`].
///
/// The discount rule is checked against the regular price entered in the
/// same form, whenever that price is a number.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate(form: &CabinForm) -> Result<CabinInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required_text(&form.name, CabinField::Name, &mut errors);

    let max_capacity = number(&form.max_capacity, CabinField::MaxCapacity, &mut errors)
        .and_then(|capacity| whole_capacity(capacity, &mut errors));

    let entered_price = number(&form.regular_price, CabinField::RegularPrice, &mut errors);
    let regular_price = entered_price.filter(|price| {
        let valid = *price >= Decimal::ONE;

        if !valid {
            errors.push(CabinField::RegularPrice, PRICE_TOO_SMALL);
        }

        valid
    });

    let discount = number(&form.discount, CabinField::Discount, &mut errors).filter(|discount| {
        let valid = entered_price.is_none_or(|price| *discount <= price);

        if !valid {
            errors.push(CabinField::Discount, DISCOUNT_ABOVE_PRICE);
        }

        valid
    });

    let description = required_text(&form.description, CabinField::Description, &mut errors);

    if form.image.is_none() {
        errors.push(CabinField::Image, REQUIRED);
    }

    match (
        name,
        max_capacity,
        regular_price,
        discount,
        description,
        form.image.as_ref(),
    ) {
        (
            Some(name),
            Some(max_capacity),
            Some(regular_price),
            Some(discount),
            Some(description),
            Some(image),
        ) if errors.is_empty() => Ok(CabinInput {
            name,
            max_capacity,
            regular_price,
            discount,
            description,
            image: image.clone(),
        }),
        _ => Err(errors),
    }
}

fn required_text(value: &str, field: CabinField, errors: &mut ValidationErrors) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        errors.push(field, REQUIRED);
        return None;
    }

    Some(trimmed.to_string())
}

fn number(value: &str, field: CabinField, errors: &mut ValidationErrors) -> Option<Decimal> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        errors.push(field, REQUIRED);
        return None;
    }

    Decimal::from_str(trimmed)
        .inspect_err(|_| errors.push(field, NOT_A_NUMBER))
        .ok()
}

/// Capacities are stored in an `INTEGER` column, so they top out at `i32::MAX`.
fn whole_capacity(capacity: Decimal, errors: &mut ValidationErrors) -> Option<u32> {
    let message = if capacity < Decimal::ONE {
        CAPACITY_TOO_SMALL
    } else if !capacity.fract().is_zero() {
        CAPACITY_NOT_WHOLE
    } else if let Some(capacity) = capacity.to_i32().and_then(|c| u32::try_from(c).ok()) {
        return Some(capacity);
    } else {
        CAPACITY_TOO_LARGE
    };

    errors.push(CabinField::MaxCapacity, message);

    None
}
