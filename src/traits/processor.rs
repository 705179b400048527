use crate::collector::{Item, ProcessedItem};

/// Annotates a single item with processing metadata.
///
/// The source item is borrowed and never modified; implementations return
/// an independent copy.
pub trait ItemProcessor: Send + Sync {
    fn process(&self, item: &Item) -> ProcessedItem;

    /// Identifier stamped into every `ProcessedItem` this processor produces.
    fn name(&self) -> &str;
}
