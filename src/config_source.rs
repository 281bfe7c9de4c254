use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{config::Config, error::ConfigError};

#[async_trait]
pub trait ConfigSource {
    /// `Ok(None)` when there is nothing to load.
    async fn load(&self) -> Result<Option<Config>, ConfigError>;
}

pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn load(&self) -> Result<Option<Config>, ConfigError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let config: Config = serde_json::from_slice(&bytes)?;
                Ok(Some(config))
            }
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Ok(None)
                } else {
                    Err(ConfigError::Io {
                        path: self.path.display().to_string(),
                        source: e,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileConfigSource::new(dir.path().join("timing.json"));
        assert!(source.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reads_config_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "port": 8181, "activities": {{ "Approve": {{}} }} }}"#
        )
        .unwrap();

        let source = FileConfigSource::new(file.path());
        let config = source.load().await.unwrap().unwrap();
        assert_eq!(config.port, 8181);
        assert!(config.activities.contains_key("Approve"));
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let source = FileConfigSource::new(file.path());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[tokio::test]
    async fn directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileConfigSource::new(dir.path());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
