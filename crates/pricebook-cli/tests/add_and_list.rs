//! Add & List Tests
//!
//! Verifies id assignment, form validation and list/total output.

use anyhow::Result;
use pricebook_testing::{TestWorld, assertions};

#[test]
fn test_add_assigns_strictly_increasing_ids() -> Result<()> {
    // Given: an empty list
    let world = TestWorld::new();

    // When: three items are added
    world.run(&["add", "Tea", "50"])?;
    world.run(&["add", "Bread", "100"])?;
    world.run(&["add", "Milk", "80"])?;

    // Then: ids are 0, 1, 2 in list order
    let result = world.run(&["list", "--format", "json"])?;
    assert!(result.success());
    let json = result.json()?;
    assertions::assert_item_count(&json, 3)?;
    assertions::assert_ids_strictly_increasing(&json)?;
    assertions::assert_item(&json, 0, "Tea", 50)?;
    assertions::assert_item(&json, 2, "Milk", 80)?;
    assertions::assert_total(&json, 230)?;

    Ok(())
}

#[test]
fn test_add_rejects_non_numeric_price() -> Result<()> {
    // Given: an empty list
    let world = TestWorld::new();

    // When: the price is not a number
    let result = world.run(&["add", "Tea", "cheap"])?;

    // Then: the command fails and nothing was persisted
    assert!(!result.success());
    assert!(result.stderr().contains("Invalid price"));
    assert_eq!(world.items_entry(), None);

    let json = world.run(&["list", "--format", "json"])?.json()?;
    assertions::assert_item_count(&json, 0)?;

    Ok(())
}

#[test]
fn test_total_matches_sum_of_prices() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["add", "Tea", "50"])?;
    world.run(&["add", "Bread", "100"])?;

    let result = world.run(&["total", "--format", "json"])?;
    assert!(result.success());
    assert_eq!(result.json()?["total"], 150);

    Ok(())
}

#[test]
fn test_list_plain_mentions_every_item_and_total() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["add", "Tea", "50"])?;

    let result = world.run(&["list"])?;

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("Tea"));
    assert!(stdout.contains("N50"));
    assert!(stdout.contains("Total: N50"));

    Ok(())
}

#[test]
fn test_empty_list_prints_hint() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["list"])?;

    assert!(result.success());
    assert!(result.stdout().contains("No items yet"));

    Ok(())
}
