//! Page layout: classification and split-pane scaffolding.

mod classify;
mod origami;

pub use classify::{classify_layout, Flavor, LAYOUT_RULES};
pub use origami::{build_split_pane, ItemKind, Orientation};
