/// Platform-specific functionality — volume capacity and free-space queries.

pub mod volume;

pub use volume::{query_volume, SystemVolumes, VolumeProbe, VolumeUsage};
