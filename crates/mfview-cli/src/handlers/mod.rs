pub mod embed;
pub mod import;
pub mod labels;
pub mod qexp;
pub mod show;
