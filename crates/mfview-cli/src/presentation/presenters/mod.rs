pub mod embed;
pub mod import;
pub mod labels;
pub mod newform;

pub use embed::present_embed_table;
pub use import::present_import_result;
pub use labels::present_label_list;
pub use newform::{present_newform, present_qexp};

/// Command lines quoted in tips
pub(crate) mod cmd {
    pub const IMPORT: &str = "mfview import <bundle.json>";
    pub const LABELS: &str = "mfview labels";

    pub fn show(label: &str) -> String {
        format!("mfview show {}", label)
    }

    pub fn qexp_all(label: &str) -> String {
        format!("mfview qexp {} --style all", label)
    }
}
