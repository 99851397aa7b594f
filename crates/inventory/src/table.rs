//! Fixed-width table rendering for items.
//!
//! Every field is first rendered to text at the requested precision; the
//! widest text of each column across all rows then decides that column's
//! width, so columns line up regardless of value magnitude.

use stockroom_core::{DomainError, DomainResult};

use crate::item::Item;

/// Number of columns in an item row.
pub const COLUMN_COUNT: usize = 11;

/// Decimal places used when the caller does not choose any.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone)]
struct Column {
    align: Align,
    prefix: &'static str,
    suffix: &'static str,
}

const fn right(prefix: &'static str, suffix: &'static str) -> Column {
    Column {
        align: Align::Right,
        prefix,
        suffix,
    }
}

// item number, description, amount, price, discount, category, brand,
// weight, width, length, color
const LAYOUT: [Column; COLUMN_COUNT] = [
    right("", " - "),
    Column {
        align: Align::Left,
        prefix: "",
        suffix: " : [",
    },
    right("", " units| "),
    right("", " kr| "),
    right("", " % off| "),
    right("", "| "),
    right("", "| "),
    right("", " kg| "),
    right("w=", "m| "),
    right("l=", "m| "),
    right("", "]"),
];

/// Rendered texts of one item, one entry per column.
pub type ColumnTexts = [String; COLUMN_COUNT];

/// Per-column widths, in characters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths([usize; COLUMN_COUNT]);

impl ColumnWidths {
    pub fn new(widths: [usize; COLUMN_COUNT]) -> Self {
        Self(widths)
    }

    /// Widest rendering of each column across `items`.
    pub fn measure<'a>(items: impl IntoIterator<Item = &'a Item>, decimal_places: usize) -> Self {
        let mut widths = Self::default();
        for item in items {
            widths.widen(&item.column_texts(decimal_places));
        }
        widths
    }

    /// Grow each column so that `texts` fits.
    pub fn widen(&mut self, texts: &ColumnTexts) {
        for (width, text) in self.0.iter_mut().zip(texts) {
            *width = (*width).max(text.chars().count());
        }
    }

    pub fn get(&self, column: usize) -> Option<usize> {
        self.0.get(column).copied()
    }

    pub fn as_array(&self) -> &[usize; COLUMN_COUNT] {
        &self.0
    }
}

/// Largest decimal place count accepted for float columns.
pub const MAX_DECIMAL_PLACES: usize = 20;

/// Check a caller-supplied decimal place count against `0..=MAX_DECIMAL_PLACES`.
pub fn decimal_places(value: i32) -> DomainResult<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&dp| dp <= MAX_DECIMAL_PLACES)
        .ok_or_else(|| {
            DomainError::invalid_argument(format!(
                "decimal places must be between 0 and {MAX_DECIMAL_PLACES}, got {value}"
            ))
        })
}

impl Item {
    /// Every field as text, floats at `decimal_places` precision.
    pub fn column_texts(&self, decimal_places: usize) -> ColumnTexts {
        let dp = decimal_places;
        [
            self.item_number().to_string(),
            self.description().to_string(),
            self.amount_in_storage().to_string(),
            self.price().to_string(),
            format!("{:.dp$}", self.discount()),
            self.category().to_string(),
            self.brand().to_string(),
            format!("{:.dp$}", self.weight()),
            format!("{:.dp$}", self.width()),
            format!("{:.dp$}", self.length()),
            self.color().to_string(),
        ]
    }

    /// One table line, each field padded to its column width.
    ///
    /// Columns narrower than the field text simply grow; nothing is cut.
    pub fn render_row(&self, widths: &ColumnWidths, decimal_places: usize) -> String {
        render_texts(&self.column_texts(decimal_places), widths)
    }

    /// This item alone as a one-row table.
    pub fn render_full(&self, decimal_places: i32) -> DomainResult<String> {
        let dp = self::decimal_places(decimal_places)?;
        Ok(render_rows([self], dp).unwrap_or_default())
    }
}

/// Render `items` as aligned rows joined by newlines, in the given order.
///
/// Returns `None` when there are no items.
pub fn create_table<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    decimal_places: i32,
) -> DomainResult<Option<String>> {
    let dp = self::decimal_places(decimal_places)?;
    Ok(render_rows(items, dp))
}

/// Table body for an already checked decimal place count.
pub(crate) fn render_rows<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    decimal_places: usize,
) -> Option<String> {
    let rows: Vec<ColumnTexts> = items
        .into_iter()
        .map(|item| item.column_texts(decimal_places))
        .collect();
    if rows.is_empty() {
        return None;
    }

    let mut widths = ColumnWidths::default();
    for texts in &rows {
        widths.widen(texts);
    }

    let lines: Vec<String> = rows.iter().map(|texts| render_texts(texts, &widths)).collect();
    Some(lines.join("\n"))
}

fn render_texts(texts: &ColumnTexts, widths: &ColumnWidths) -> String {
    let mut line = String::new();
    for ((text, column), &width) in texts.iter().zip(&LAYOUT).zip(widths.as_array()) {
        line.push_str(column.prefix);
        match column.align {
            Align::Left => line.push_str(&format!("{text:<width$}")),
            Align::Right => line.push_str(&format!("{text:>width$}")),
        }
        line.push_str(column.suffix);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ItemCategory;
    use crate::item::NewItem;

    fn item(number: &str, description: &str, amount: i64, price: i64, weight: f64) -> Item {
        Item::new(NewItem {
            item_number: number.to_string(),
            description: description.to_string(),
            amount_in_storage: amount,
            price,
            category: ItemCategory::Doors,
            brand: "Bendell".to_string(),
            weight,
            width: 1.02,
            length: 2.4,
            color: "Brown".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn render_full_uses_unit_decorations() {
        let door = item("HA56Y3", "Mahogany door, 240cm", 34, 541, 14.35);
        assert_eq!(
            door.render_full(2).unwrap(),
            "HA56Y3 - Mahogany door, 240cm : [34 units| 541 kr| 0.00 % off| Doors| Bendell| 14.35 kg| w=1.02m| l=2.40m| Brown]"
        );
    }

    #[test]
    fn render_full_respects_precision() {
        let door = item("HA56Y3", "Door", 1, 1, 14.35);
        assert_eq!(
            door.render_full(0).unwrap(),
            "HA56Y3 - Door : [1 units| 1 kr| 0 % off| Doors| Bendell| 14 kg| w=1m| l=2m| Brown]"
        );
    }

    #[test]
    fn create_table_aligns_columns() {
        let a = item("A1", "Long description", 5, 1200, 3.5);
        let b = item("LONG-77", "Short", 150, 9, 12.3);

        let table = create_table([&a, &b], 1).unwrap().unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "     A1 - Long description : [  5 units| 1200 kr| 0.0 % off| Doors| Bendell|  3.5 kg| w=1.0m| l=2.4m| Brown]"
        );
        assert_eq!(
            lines[1],
            "LONG-77 - Short            : [150 units|    9 kr| 0.0 % off| Doors| Bendell| 12.3 kg| w=1.0m| l=2.4m| Brown]"
        );
    }

    #[test]
    fn create_table_of_nothing_is_none() {
        let none: [&Item; 0] = [];
        assert_eq!(create_table(none, 2).unwrap(), None);
    }

    #[test]
    fn negative_decimal_places_are_rejected() {
        let door = item("A1", "Door", 1, 1, 1.0);
        assert!(matches!(
            create_table([&door], -1),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(door.render_full(-3), Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn decimal_places_above_maximum_are_rejected() {
        let door = item("A1", "Door", 1, 1, 1.0);
        let max = MAX_DECIMAL_PLACES as i32;

        assert_eq!(decimal_places(max).unwrap(), MAX_DECIMAL_PLACES);
        assert!(door.render_full(max).unwrap().contains("1.00000000000000000000 kg"));

        for too_many in [max + 1, 70_000, i32::MAX] {
            assert!(matches!(
                door.render_full(too_many),
                Err(DomainError::InvalidArgument(_))
            ));
            assert!(matches!(
                create_table([&door], too_many),
                Err(DomainError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn measure_takes_widest_text_per_column() {
        let a = item("A1", "abc", 5, 1200, 3.5);
        let b = item("LONG-77", "a", 150, 9, 12.3);
        let widths = ColumnWidths::measure([&a, &b], 2);
        assert_eq!(widths.get(0), Some(7));
        assert_eq!(widths.get(1), Some(3));
        assert_eq!(widths.get(2), Some(3));
        assert_eq!(widths.get(3), Some(4));
        assert_eq!(widths.get(7), Some(5));
        assert_eq!(widths.get(COLUMN_COUNT), None);
    }

    #[test]
    fn render_row_pads_to_given_widths() {
        let a = item("A1", "Door", 5, 12, 3.5);
        let mut widths = ColumnWidths::new([4, 6, 3, 3, 5, 6, 8, 5, 5, 5, 6]);
        widths.widen(&a.column_texts(2));
        assert_eq!(
            a.render_row(&widths, 2),
            "  A1 - Door   : [  5 units|  12 kr|  0.00 % off|  Doors|  Bendell|  3.50 kg| w= 1.02m| l= 2.40m|  Brown]"
        );
    }
}
