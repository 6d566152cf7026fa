use std::path::PathBuf;
use crate::error::LoaderError;

pub struct DownloadConfiguration {
    pub url: String,
    pub file_path: PathBuf,
    pub timeout: u64,
    pub create_dir: bool,
}

impl DownloadConfiguration {
    pub fn new() -> DownloadConfigurationBuilder {
        DownloadConfigurationBuilder::new()
    }

    /// Path the payload is streamed to before the final rename.
    pub fn temp_file_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.temp", self.file_path.display()))
    }
}

pub struct DownloadConfigurationBuilder {
    url: Option<String>,
    file_path: Option<PathBuf>,
    timeout: u64,
    create_dir: bool,
}

impl DownloadConfigurationBuilder {
    fn new() -> Self {
        Self {
            url: None,
            file_path: None,
            timeout: 30,
            create_dir: false,
        }
    }

    pub fn set_url(mut self, url: impl Into<String>) -> DownloadConfigurationBuilder {
        self.url = Some(url.into());
        self
    }

    pub fn set_file_path(mut self, path: impl Into<PathBuf>) -> DownloadConfigurationBuilder {
        self.file_path = Some(path.into());
        self
    }

    /// Request timeout in seconds, 0 disables the timeout.
    pub fn set_timeout(mut self, timeout: u64) -> DownloadConfigurationBuilder {
        self.timeout = timeout;
        self
    }

    pub fn create_dir(mut self, create: bool) -> DownloadConfigurationBuilder {
        self.create_dir = create;
        self
    }

    pub fn build(self) -> crate::error::Result<DownloadConfiguration> {
        let url = match self.url {
            Some(url) if !url.is_empty() => url,
            _ => {
                return Err(LoaderError::Configuration(
                    "download url not set".to_string(),
                ));
            }
        };

        let file_path = match self.file_path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                return Err(LoaderError::Configuration(
                    "download file path not set".to_string(),
                ));
            }
        };

        Ok(DownloadConfiguration {
            url,
            file_path,
            timeout: self.timeout,
            create_dir: self.create_dir,
        })
    }
}
