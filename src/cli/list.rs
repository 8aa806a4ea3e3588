use std::path::PathBuf;

use crate::error::Result;
use crate::store::{sorted_by_priority, Store};

/// Print all items sorted ascending by priority.
///
/// The 1-based rank is positional in the sorted output and is not the
/// stored index that 'remove' takes. An empty list prints nothing.
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = Store::new(&config.data_file);

    let items = store.load()?;
    for (rank, item) in sorted_by_priority(&items).iter().enumerate() {
        println!("{}. [{}] {}", rank + 1, item.priority, item.title);
    }

    Ok(())
}
