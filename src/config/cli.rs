use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let path = Path::new(path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, data)?;
        Ok(())
    }
}
