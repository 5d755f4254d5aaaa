mod manifest;
mod source;

pub use manifest::{DataManifest, MANIFEST_FILE};
pub use source::{DataSource, DiskSource, MemSource};
