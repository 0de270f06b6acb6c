// Layout engine: places a rendered VisualDocument on an A4-wide page.
// Pure and CPU-bound; async callers must go through tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;
pub mod wrap;

pub use flow::{layout_page, PageLayout, PlacedItem, PAGE_WIDTH_PX};
