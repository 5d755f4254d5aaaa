use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow};

/// Read-only access to dashboard data files by source-relative path, e.g.
/// "geometry/tracts.geojson", "attributes/total_population_2023.csv".
pub trait DataSource: Send + Sync {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>>;
    fn has(&self, rel: &str) -> bool;
}

/// Data directory on disk.
#[derive(Debug, Clone)]
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl DataSource for DiskSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let path = self.full(rel);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("[source::DiskSource] Failed to read {}", path.display()))?;
        Ok(Arc::from(bytes))
    }

    fn has(&self, rel: &str) -> bool { self.full(rel).is_file() }
}

/// In-memory data files, keyed by relative path.
#[derive(Debug, Default, Clone)]
pub struct MemSource {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self { Self { files } }

    /// Builder-style insert.
    pub fn with_file(mut self, rel: &str, bytes: impl AsRef<[u8]>) -> Self {
        self.insert(rel, bytes);
        self
    }

    pub fn insert(&mut self, rel: &str, bytes: impl AsRef<[u8]>) {
        self.files.insert(rel.to_string(), Arc::from(bytes.as_ref()));
    }
}

impl DataSource for MemSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        self.files.get(rel).cloned()
            .ok_or_else(|| anyhow!("[source::MemSource] missing data file: {rel}"))
    }

    fn has(&self, rel: &str) -> bool { self.files.contains_key(rel) }
}
