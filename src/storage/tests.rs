use super::{load_records_or_default, save_value, FileStorage, MemoryStorage, Storage, StorageError};
use anyhow::{anyhow, Result};
use std::fs;

#[test]
fn test_memory_storage_basic_load_and_save_operations() -> Result<()> {
    let storage = MemoryStorage::new();

    assert!(storage.load("transactions")?.is_none());

    storage.save("transactions", "[]")?;

    let blob = storage.load("transactions")?.ok_or_else(|| anyhow!("Blob not found in storage"))?;

    assert_eq!(blob, "[]");
    assert_eq!(storage.len(), 1);

    Ok(())
}

#[test]
fn test_memory_storage_enforces_correct_overwrite_semantics() -> Result<()> {
    let storage = MemoryStorage::new();
    let shared_handle = storage.clone();

    storage.save("transactions", "[1]")?;
    shared_handle.save("transactions", "[1,2]")?;

    assert_eq!(storage.load("transactions")?.as_deref(), Some("[1,2]"));
    assert_eq!(storage.len(), 1);

    Ok(())
}

#[test]
fn test_storage_rejects_keys_that_are_not_plain_names() {
    let storage = MemoryStorage::new();

    assert!(matches!(storage.save("../escape", "[]"), Err(StorageError::InvalidKey(_))));
    assert!(matches!(storage.load(""), Err(StorageError::InvalidKey(_))));
    assert!(storage.is_empty());
}

#[test]
fn test_file_storage_round_trips_blobs_between_instances() -> Result<()> {
    let directory = tempfile::tempdir()?;

    let writer = FileStorage::open(directory.path())?;
    writer.save("transactions", "[\"a\",\"b\"]")?;

    let reader = FileStorage::open(directory.path())?;

    assert_eq!(reader.load("transactions")?.as_deref(), Some("[\"a\",\"b\"]"));
    assert!(directory.path().join("transactions.json").exists());

    Ok(())
}

#[test]
fn test_file_storage_reports_missing_keys_as_none() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let storage = FileStorage::open(directory.path().join("nested").join("store"))?;

    assert!(storage.load("transactions")?.is_none());
    assert!(storage.directory().is_dir());

    Ok(())
}

#[test]
fn test_load_records_or_default_falls_back_on_missing_or_corrupted_data() -> Result<()> {
    let storage = MemoryStorage::new();

    let missing: Vec<u32> = load_records_or_default(&storage, "numbers");
    assert!(missing.is_empty());

    storage.save("numbers", "{ not json")?;
    let corrupted: Vec<u32> = load_records_or_default(&storage, "numbers");
    assert!(corrupted.is_empty());

    let invalid_key: Vec<u32> = load_records_or_default(&storage, "bad key");
    assert!(invalid_key.is_empty());

    Ok(())
}

#[test]
fn test_load_records_or_default_falls_back_when_the_file_is_unreadable() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let storage = FileStorage::open(directory.path())?;

    // A directory where the file should be makes the read fail.
    fs::create_dir(directory.path().join("numbers.json"))?;

    let numbers: Vec<u32> = load_records_or_default(&storage, "numbers");

    assert!(numbers.is_empty());

    Ok(())
}

#[test]
fn test_save_value_then_load_preserves_order() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let storage = FileStorage::open(directory.path())?;

    save_value(&storage, "numbers", &vec![3, 1, 2])?;
    let numbers: Vec<u32> = load_records_or_default(&storage, "numbers");

    assert_eq!(numbers, vec![3, 1, 2]);

    Ok(())
}

#[test]
fn test_load_records_skips_only_unreadable_records() -> Result<()> {
    let storage = MemoryStorage::new();
    storage.save("numbers", "[4, \"four\", -1, 5]")?;

    let numbers: Vec<u32> = load_records_or_default(&storage, "numbers");

    assert_eq!(numbers, vec![4, 5]);

    storage.save("numbers", "{\"first\": 4}")?;
    let not_a_list: Vec<u32> = load_records_or_default(&storage, "numbers");

    assert!(not_a_list.is_empty());

    Ok(())
}
