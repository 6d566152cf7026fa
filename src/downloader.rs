use std::sync::Arc;
use reqwest::Client;
use tokio::fs;
use tokio::spawn;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use crate::download_configuration::DownloadConfiguration;
use crate::download_sender::DownloadSender;
use crate::download_status::DownloadStatus;
use crate::download_task::DownloadTask;
use crate::error::LoaderError;
use crate::image_verify;
use crate::progress_projector::ProgressSample;
use crate::remote_file;
use crate::stream::Stream;

/// One download attempt: probe the total, stream the payload to a temp
/// file, rename it into place, verify it decodes as an image.
pub struct Downloader {
    config: Arc<DownloadConfiguration>,
    client: Arc<Client>,
    download_status: Arc<RwLock<DownloadStatus>>,
    sender: Arc<DownloadSender>,
    thread_handle: Option<JoinHandle<()>>,
}

impl Downloader {
    pub fn new(config: DownloadConfiguration, client: Arc<Client>, sender: Arc<DownloadSender>) -> Downloader {
        Downloader {
            config: Arc::new(config),
            client,
            download_status: Arc::new(RwLock::new(DownloadStatus::None)),
            sender,
            thread_handle: None,
        }
    }

    pub fn start_download(&mut self) {
        let handle = spawn(async_start_download(
            self.config.clone(),
            self.client.clone(),
            self.sender.clone(),
            self.download_status.clone()));
        self.thread_handle = Some(handle);
    }

    pub fn is_done(&self) -> bool {
        if let Some(handle) = &self.thread_handle {
            return handle.is_finished();
        }
        false
    }
}

async fn change_download_status(status: &Arc<RwLock<DownloadStatus>>, sender: &Arc<DownloadSender>, to_status: DownloadStatus) {
    *status.write().await = to_status;
    let _ = sender.status_sender.send(to_status.into());
    tracing::debug!("download status: {}", to_status);
}

async fn async_start_download(
    config: Arc<DownloadConfiguration>,
    client: Arc<Client>,
    sender: Arc<DownloadSender>,
    status: Arc<RwLock<DownloadStatus>>) {

    change_download_status(&status, &sender, DownloadStatus::Head).await;

    // The probe is best-effort, only the transfer itself decides success.
    // A failed probe leaves the total unknown.
    let mut total_bytes_expected = 0u64;
    match remote_file::head(&client, &config).await {
        Ok(info) => {
            total_bytes_expected = info.total_length;
            tracing::debug!(
                "remote file: {} bytes, last modified {}",
                info.total_length,
                info.last_modified_time
            );
        }
        Err(e) => {
            tracing::warn!("head request failed, total size unknown: {}", e);
        }
    }

    let _ = sender.progress_sender.send(ProgressSample::new(0, total_bytes_expected));

    change_download_status(&status, &sender, DownloadStatus::Download).await;

    let temp_path = config.temp_file_path();
    let mut sink = match Stream::create(&temp_path, config.create_dir).await {
        Ok(sink) => sink,
        Err(e) => {
            let _ = sender.error_sender.send(e);
            change_download_status(&status, &sender, DownloadStatus::Failed).await;
            return;
        }
    };

    let mut task = DownloadTask::new(config.clone());
    if let Err(e) = task.start_download(client.clone(), &mut sink, &sender, total_bytes_expected).await {
        let _ = sender.error_sender.send(e);
        change_download_status(&status, &sender, DownloadStatus::Failed).await;
        return;
    }
    drop(sink);

    change_download_status(&status, &sender, DownloadStatus::Finalize).await;
    if let Err(e) = fs::rename(&temp_path, &config.file_path).await {
        let _ = sender.error_sender.send(LoaderError::FileRename(format!("{}", e)));
        change_download_status(&status, &sender, DownloadStatus::Failed).await;
        return;
    }

    change_download_status(&status, &sender, DownloadStatus::Decode).await;
    if let Err(e) = image_verify::validate(&config.file_path).await {
        let _ = sender.error_sender.send(e);
        change_download_status(&status, &sender, DownloadStatus::Failed).await;
        return;
    }

    let _ = sender.payload_path_sender.send(Some(config.file_path.clone()));
    change_download_status(&status, &sender, DownloadStatus::Complete).await;
}
