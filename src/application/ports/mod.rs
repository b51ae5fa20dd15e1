mod ephemeral_store;
mod text_extractor;

pub use ephemeral_store::{EphemeralStore, EphemeralStoreError};
pub use text_extractor::{TextExtractor, TextExtractorError};
