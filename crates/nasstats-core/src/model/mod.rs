/// Data model for discovered media files.
///
/// Re-exports the record type, the media-type enum and size helpers.
pub mod media_record;
pub mod size;

pub use media_record::{MediaRecord, MediaType};
