use std::path::PathBuf;

use crate::display;
use crate::error::Result;
use crate::ollama::OllamaClient;
use crate::store::{PriorityItem, Store};

/// Ask the configured Ollama instance to summarize the list.
///
/// Network and decode failures are printed, not fatal: the process
/// exits 0 either way. No retries.
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = Store::new(&config.data_file);

    let items = store.load()?;
    if items.is_empty() {
        println!("No priorities to summarize.");
        return Ok(());
    }

    let prompt = build_prompt(&items);
    let client = OllamaClient::new(&config.ollama);

    match client.generate(&prompt) {
        Ok(summary) => {
            println!("Ollama Summary:");
            display::print_summary(&summary);
        }
        Err(e) => println!("Error contacting Ollama: {}", e),
    }

    Ok(())
}

/// Build the single prompt enumerating every item
fn build_prompt(items: &[PriorityItem]) -> String {
    let mut prompt = String::from("Summarize and categorize the following list of priorities:\n");
    for item in items {
        prompt.push_str(&format!("- [{}] {}\n", item.priority, item.title));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_lists_every_item() {
        let items = vec![
            PriorityItem::new(2, "Write report"),
            PriorityItem::new(1, "Fix bug"),
        ];

        let prompt = build_prompt(&items);
        assert!(prompt.starts_with("Summarize and categorize"));
        // Items appear in stored order, not sorted
        let report_pos = prompt.find("- [2] Write report").unwrap();
        let bug_pos = prompt.find("- [1] Fix bug").unwrap();
        assert!(report_pos < bug_pos);
    }

    #[test]
    fn test_build_prompt_one_line_per_item() {
        let items = vec![PriorityItem::new(0, "only")];
        let prompt = build_prompt(&items);
        assert_eq!(prompt.lines().count(), 2);
        assert!(prompt.ends_with("- [0] only\n"));
    }
}
