use chrono::DateTime;
use reqwest::Client;
use reqwest::header::HeaderMap;
use std::time::Duration;
use crate::download_configuration::DownloadConfiguration;
use crate::error::LoaderError;

pub struct RemoteFileInfo {
    pub total_length: u64,
    pub last_modified_time: i64,
}

impl RemoteFileInfo {
    pub fn new(head_map: &HeaderMap) -> Self {
        let mut total_length = 0u64;
        let mut last_modified_time = 0i64;
        if let Some(content_length) = head_map.get("content-length") {
            if let Ok(content_length_str) = content_length.to_str() {
                if let Ok(length) = content_length_str.parse() {
                    total_length = length;
                }
            }
        }
        if let Some(last_modified) = head_map.get("last-modified") {
            if let Ok(last_modified_str) = last_modified.to_str() {
                if let Ok(last_modified_datetime) = DateTime::parse_from_rfc2822(last_modified_str) {
                    last_modified_time = last_modified_datetime.timestamp();
                }
            }
        }

        Self {
            total_length,
            last_modified_time,
        }
    }
}

pub async fn head(client: &Client, config: &DownloadConfiguration) -> crate::error::Result<RemoteFileInfo> {
    let mut request = client.head(&config.url);
    if config.timeout > 0 {
        request = request.timeout(Duration::from_secs(config.timeout));
    }
    match request.send().await {
        Ok(response) => {
            match response.error_for_status() {
                Ok(response) => Ok(RemoteFileInfo::new(response.headers())),
                Err(_e) => Err(LoaderError::Head),
            }
        }
        Err(_e) => Err(LoaderError::Head),
    }
}
