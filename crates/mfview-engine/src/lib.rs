// Presenter layer: store rows in, display-ready strings out
// Everything here is synchronous and request-scoped; a WebNewform owns its data once built

mod display;
mod embedding;
mod links;
mod newform;
mod qexp;

pub use display::{NOT_AVAILABLE, NOT_IN_LMFDB, QexpFormat};
pub use embedding::{EmbedFormat, EmbedRange};
pub use links::{CharacterLinker, FieldKnowl, LmfdbLinks};
pub use newform::{InnerTwist, PageLink, Property, WebNewform};
pub use qexp::{eigs_as_seqseq_to_qexp, split_on_pm};

pub use mfview_types::{Error, Result};
