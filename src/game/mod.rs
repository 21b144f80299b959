//! Game entry drafts: OCR prefill and submission validation.

pub mod record;
pub mod validate;

pub use record::{EntryMethod, GameRecord, PlayerRecord};
pub use validate::GameValidationError;
