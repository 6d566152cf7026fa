use std::path::PathBuf;
use tokio::sync::watch::Sender;
use crate::error::LoaderError;
use crate::progress_projector::ProgressSample;

pub struct DownloadSender {
    pub progress_sender: Sender<ProgressSample>,
    pub status_sender: Sender<u8>,
    pub error_sender: Sender<LoaderError>,
    pub payload_path_sender: Sender<Option<PathBuf>>,
}
