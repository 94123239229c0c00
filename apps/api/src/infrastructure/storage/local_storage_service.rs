use super::traits::StorageService;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};

/// Saves uploaded photos as plain files in a single directory.
///
/// Keys are bare file names. Writing an existing key replaces the file.
pub struct LocalStorageService {
    root: PathBuf,
    public_path: String,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>, public_path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_path: public_path.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates the uploads directory if it does not exist yet.
    pub async fn initialize(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Uploads directory ready at: {:?}", self.root);
        Ok(())
    }

    fn path_for(&self, key: &str) -> anyhow::Result<PathBuf> {
        let name = Path::new(key)
            .file_name()
            .filter(|name| *name == key)
            .ok_or_else(|| anyhow::anyhow!("Invalid storage key: {}", key))?;
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> anyhow::Result<String> {
        let path = self.path_for(key)?;

        let mut file = fs::File::create(&path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;

        tracing::debug!("Stored {} ({} bytes, {})", path.display(), data.len(), content_type);
        Ok(path.to_string_lossy().into_owned())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Deleted {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn get_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_path, key)
    }
}
