//! Black-box tests through the public registry API.

use stockroom_inventory::{
    DomainError, EMPTY_TABLE, ItemCategory, NewItem, Registry, RegistryConfig,
};

fn oak_table() -> NewItem {
    NewItem {
        item_number: "A1".to_string(),
        description: "Oak table".to_string(),
        amount_in_storage: 10,
        price: 500,
        category: ItemCategory::Tables,
        brand: "Acme".to_string(),
        weight: 5.0,
        width: 1.0,
        length: 2.0,
        color: "Brown".to_string(),
    }
}

#[test]
fn oak_table_walkthrough() {
    let mut registry = Registry::new();
    registry.register_new_item(oak_table()).unwrap();
    assert_eq!(registry.get_item("A1").unwrap().price_after_discount(), 500);

    registry.set_item_discount("A1", 20.0).unwrap();
    assert_eq!(registry.get_item("A1").unwrap().price_after_discount(), 400);

    registry.increase_amount_in_storage("A1", 5).unwrap();
    assert_eq!(registry.get_item("A1").unwrap().amount_in_storage(), 15);

    let err = registry.decrease_amount_in_storage("A1", 20).unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
    assert_eq!(registry.get_item("A1").unwrap().amount_in_storage(), 15);
}

#[test]
fn sample_registry_supports_search_and_lookup() {
    let registry = Registry::with_sample_data().unwrap();
    assert_eq!(registry.len(), 13);

    let mut doors: Vec<String> = registry
        .search_by_description("DOOR")
        .into_iter()
        .map(String::from)
        .collect();
    doors.sort();
    assert_eq!(doors, vec!["19FT65", "FJ8I7T", "HA56Y3"]);

    let mut planks: Vec<String> = registry
        .search_by_item_number("s24")
        .into_iter()
        .map(String::from)
        .collect();
    planks.sort();
    assert_eq!(planks, vec!["BW3S24", "BW4S24", "BW9S24"]);

    let sofa = registry.get_item("P2YI2T").unwrap();
    assert_eq!(sofa.category(), ItemCategory::Chairs);
    assert_eq!(sofa.render_short(), "Charger X4 Sofa   [P2YI2T]");
}

#[test]
fn seeding_twice_reports_duplicate() {
    let mut registry = Registry::with_sample_data().unwrap();
    assert_eq!(
        registry.fill_with_sample_data().unwrap_err(),
        DomainError::DuplicateKey("HA56Y3".to_string())
    );
    assert_eq!(registry.len(), 13);
}

#[test]
fn sample_table_rows_line_up() {
    let registry = Registry::with_sample_data().unwrap();
    let table = registry.render_table(2).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 13);

    let width = lines[0].chars().count();
    for line in &lines {
        assert_eq!(line.chars().count(), width);
        assert_eq!(line.find(" - "), Some(6));
        assert!(line.ends_with(']'));
    }

    let door = lines
        .iter()
        .find(|l| l.starts_with("HA56Y3"))
        .unwrap();
    assert!(door.contains("Mahogany door, 240cm"));
    assert!(door.contains("w=1.02m"));
    assert!(door.contains("14.35 kg"));
}

#[test]
fn empty_registry_renders_placeholder() {
    let mut registry = Registry::from_config(&RegistryConfig::default()).unwrap();
    assert_eq!(registry.render_table(0).unwrap(), EMPTY_TABLE);

    registry.register_new_item(oak_table()).unwrap();
    assert!(registry.delete_item_entry("A1"));
    assert_eq!(registry.to_string(), EMPTY_TABLE);
}
