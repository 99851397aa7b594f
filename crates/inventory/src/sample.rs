//! Fixed sample records used to seed a fresh registry.

use crate::category::ItemCategory;
use crate::item::NewItem;

// item number, description, amount, price, category, brand, weight, width, length, color
type SampleRow = (
    &'static str,
    &'static str,
    i64,
    i64,
    ItemCategory,
    &'static str,
    f64,
    f64,
    f64,
    &'static str,
);

#[rustfmt::skip]
const SAMPLE_ROWS: [SampleRow; 13] = [
    ("HA56Y3", "Mahogany door, 240cm", 34, 541, ItemCategory::Doors, "Bendell", 14.35, 1.02, 2.40, "Brown"),
    ("WE2785", "Small circular window", 58, 784, ItemCategory::Windows, "Dynamik", 3.56, 0.5, 0.5, "Chrome"),
    ("G15BF8", "Bathroom tiles, 22-pack", 4, 1061, ItemCategory::Floors, "Bendell", 3.94, 0.098, 0.198, "Grey"),
    ("19FT65", "Mahogany door, 240cm", 96, 1207, ItemCategory::Doors, "Ikea", 16.77, 1.02, 2.40, "Brown"),
    ("QW05ER", "Lawn chair in birch", 11, 1745, ItemCategory::Wood, "Bendell", 9.9, 1.12, 2.0, "Brown"),
    ("FJ8I7T", "Designer door carved from willow", 18, 3508, ItemCategory::Doors, "Heidal", 16.7, 1.02, 2.0, "Dark brown"),
    ("FW312V", "Birch floor planks, 10-pack", 179, 430, ItemCategory::Wood, "Ikea", 7.4, 0.2, 1.0, "Beige"),
    ("5MN6L9", "Large window, 3x5 meters", 89, 4570, ItemCategory::Windows, "Bendell", 16.7, 3.16, 5.16, "White"),
    ("P2YI2L", "Epoxy office desk in dark wood", 29, 9899, ItemCategory::Tables, "Heidal", 16.7, 2.63, 1.38, "Dark brown"),
    ("P2YI2T", "Charger X4 Sofa", 35, 6045, ItemCategory::Chairs, "Bendell", 45.1, 2.52, 1.12, "Black"),
    ("BW9S24", "Maple planks, 2x4 inches", 526, 56, ItemCategory::Wood, "Dynamik", 4.7, 0.1016, 1.0, "Brown"),
    ("BW3S24", "Birch planks, 2x4 inches", 474, 38, ItemCategory::Wood, "Dynamik", 3.1, 0.1016, 1.0, "Beige"),
    ("BW4S24", "Oak planks, 2x4 inches", 533, 45, ItemCategory::Wood, "Dynamik", 3.8, 0.1016, 1.0, "Brown"),
];

/// The sample records, ready for [`crate::Registry::register_new_item`].
pub fn sample_items() -> Vec<NewItem> {
    SAMPLE_ROWS.iter().map(|&row| sample_item(row)).collect()
}

fn sample_item(row: SampleRow) -> NewItem {
    let (
        item_number,
        description,
        amount_in_storage,
        price,
        category,
        brand,
        weight,
        width,
        length,
        color,
    ) = row;
    NewItem {
        item_number: item_number.to_string(),
        description: description.to_string(),
        amount_in_storage,
        price,
        category,
        brand: brand.to_string(),
        weight,
        width,
        length,
        color: color.to_string(),
    }
}
