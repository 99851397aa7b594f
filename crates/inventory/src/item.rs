use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemNumber, ValidationReason};

use crate::category::ItemCategory;

/// Field names reported in [`DomainError::Validation`].
pub mod field {
    pub const ITEM_NUMBER: &str = stockroom_core::ItemNumber::FIELD;
    pub const DESCRIPTION: &str = "description";
    pub const AMOUNT_IN_STORAGE: &str = "amount_in_storage";
    pub const PRICE: &str = "price";
    pub const DISCOUNT: &str = "discount";
    pub const BRAND: &str = "brand";
    pub const WEIGHT: &str = "weight";
    pub const WIDTH: &str = "width";
    pub const LENGTH: &str = "length";
    pub const COLOR: &str = "color";
}

/// Fractional percent steps resolved by [`Item::price_after_discount`].
const DISCOUNT_SCALE: i128 = 1_000_000;

/// Full attribute set of an item about to be registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub item_number: String,
    pub description: String,
    pub amount_in_storage: i64,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub category: ItemCategory,
    pub brand: String,
    /// Weight of a single unit, in kilograms.
    pub weight: f64,
    /// Width in metres.
    pub width: f64,
    /// Length in metres.
    pub length: f64,
    pub color: String,
}

/// A quantity of identical goods stocked in the warehouse.
///
/// All fields are validated on construction and on every setter, so an
/// `Item` value is always well-formed: text fields are non-blank, numbers are
/// non-negative and the discount stays within `0..=100` percent. `Clone`
/// yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    item_number: ItemNumber,
    description: String,
    amount_in_storage: i64,
    price: i64,
    discount: f64,
    category: ItemCategory,
    brand: String,
    weight: f64,
    width: f64,
    length: f64,
    color: String,
}

impl Item {
    /// Build an item from its attributes. The discount starts at zero.
    ///
    /// Fails with the first offending field; nothing is built on failure.
    pub fn new(new: NewItem) -> DomainResult<Self> {
        let item_number = ItemNumber::new(new.item_number)?;
        require_text(field::DESCRIPTION, &new.description)?;
        require_non_negative(field::AMOUNT_IN_STORAGE, new.amount_in_storage)?;
        require_non_negative(field::PRICE, new.price)?;
        require_text(field::BRAND, &new.brand)?;
        require_measure(field::WEIGHT, new.weight)?;
        require_measure(field::WIDTH, new.width)?;
        require_measure(field::LENGTH, new.length)?;
        require_text(field::COLOR, &new.color)?;

        Ok(Self {
            item_number,
            description: new.description,
            amount_in_storage: new.amount_in_storage,
            price: new.price,
            discount: 0.0,
            category: new.category,
            brand: new.brand,
            weight: new.weight,
            width: new.width,
            length: new.length,
            color: new.color,
        })
    }

    pub fn item_number(&self) -> &ItemNumber {
        &self.item_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount_in_storage(&self) -> i64 {
        self.amount_in_storage
    }

    /// Stored price, not adjusted by the discount.
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Discount in percent.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Price with the discount applied, truncated to whole minor units.
    ///
    /// The discount is resolved to millionths of a percent and the rest is
    /// integer arithmetic, so large prices keep every digit.
    pub fn price_after_discount(&self) -> i64 {
        let kept = ((100.0 - self.discount) * DISCOUNT_SCALE as f64).round() as i128;
        let discounted = i128::from(self.price) * kept / (100 * DISCOUNT_SCALE);
        // kept <= 100 * DISCOUNT_SCALE, so the result never exceeds the price.
        discounted as i64
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> DomainResult<()> {
        let description = description.into();
        require_text(field::DESCRIPTION, &description)?;
        self.description = description;
        Ok(())
    }

    pub fn set_amount_in_storage(&mut self, amount: i64) -> DomainResult<()> {
        require_non_negative(field::AMOUNT_IN_STORAGE, amount)?;
        self.amount_in_storage = amount;
        Ok(())
    }

    pub fn set_price(&mut self, price: i64) -> DomainResult<()> {
        require_non_negative(field::PRICE, price)?;
        self.price = price;
        Ok(())
    }

    /// Set the discount in percent; `0` disables it.
    pub fn set_discount(&mut self, percent_off: f64) -> DomainResult<()> {
        require_percentage(field::DISCOUNT, percent_off)?;
        self.discount = percent_off;
        Ok(())
    }

    /// Compact form for list views: `"<description>   [<item number>]"`.
    pub fn render_short(&self) -> String {
        format!("{}   [{}]", self.description, self.item_number)
    }
}

impl Entity for Item {
    type Id = ItemNumber;

    fn id(&self) -> &Self::Id {
        &self.item_number
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render_short())
    }
}

/// Wire shape of an [`Item`]; converted through the same validation as [`Item::new`].
#[derive(Deserialize)]
struct ItemRecord {
    item_number: String,
    description: String,
    amount_in_storage: i64,
    price: i64,
    #[serde(default)]
    discount: f64,
    category: ItemCategory,
    brand: String,
    weight: f64,
    width: f64,
    length: f64,
    color: String,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let mut item = Item::new(NewItem {
            item_number: record.item_number,
            description: record.description,
            amount_in_storage: record.amount_in_storage,
            price: record.price,
            category: record.category,
            brand: record.brand,
            weight: record.weight,
            width: record.width,
            length: record.length,
            color: record.color,
        })?;
        item.set_discount(record.discount)?;
        Ok(item)
    }
}

fn require_text(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, ValidationReason::Blank));
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: i64) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::validation(field, ValidationReason::Negative));
    }
    Ok(())
}

fn require_measure(field: &'static str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(field, ValidationReason::NotFinite));
    }
    if value < 0.0 {
        return Err(DomainError::validation(field, ValidationReason::Negative));
    }
    Ok(())
}

fn require_percentage(field: &'static str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(field, ValidationReason::NotFinite));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(DomainError::validation(
            field,
            ValidationReason::OutOfRange { min: 0, max: 100 },
        ));
    }
    Ok(())
}
