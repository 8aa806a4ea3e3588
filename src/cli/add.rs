use std::path::PathBuf;

use crate::error::Result;
use crate::store::{PriorityItem, Store};

/// Append a new priority item and persist the list
pub fn run(config_path: Option<PathBuf>, priority: i64, title: String) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = Store::new(&config.data_file);

    // Items keep insertion order; priority only affects how 'list' sorts
    let mut items = store.load()?;
    items.push(PriorityItem::new(priority, title.clone()));
    store.save(&items)?;

    println!("Added: {} (priority {})", title, priority);

    Ok(())
}
