pub mod embed;
pub mod import;
pub mod labels;
pub mod newform;
