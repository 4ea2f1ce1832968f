//! The `reset` command: wipe the persisted notification history

use crate::error::Result;
use crate::watermark::WatermarkStore;

/// Delete every persisted watermark and report how many were removed
///
/// After a reset the next run treats every fetched item as new, so a full
/// re-notification flood is expected.
pub fn reset(state_path: Option<String>) -> Result<usize> {
    let store = match state_path {
        Some(path) => WatermarkStore::open(path)?,
        None => WatermarkStore::open_default()?,
    };

    let deleted = store.reset()?;
    if deleted > 0 {
        println!(
            "Deleted {} watermark entries. The next run will re-notify all items.",
            deleted
        );
    } else {
        println!("No watermark entries found.");
    }
    Ok(deleted)
}
