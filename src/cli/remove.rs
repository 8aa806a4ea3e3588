use std::path::PathBuf;

use crate::error::Result;
use crate::store::Store;

/// Remove an item by its 1-based stored (insertion-order) index.
///
/// An out-of-range index prints "Invalid index" and leaves the list
/// untouched; the process still exits 0.
pub fn run(config_path: Option<PathBuf>, index: i64) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = Store::new(&config.data_file);

    let mut items = store.load()?;

    if index < 1 || index as usize > items.len() {
        println!("Invalid index");
        return Ok(());
    }

    let removed = items.remove(index as usize - 1);
    store.save(&items)?;

    println!("Removed: {}", removed.title);

    Ok(())
}
