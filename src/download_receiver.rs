use std::path::PathBuf;
use tokio::sync::watch::Receiver;
use crate::error::LoaderError;
use crate::progress_projector::ProgressSample;

#[derive(Clone)]
pub struct DownloadReceiver {
    pub progress_receiver: Receiver<ProgressSample>,
    pub status_receiver: Receiver<u8>,
    pub error_receiver: Receiver<LoaderError>,
    pub payload_path_receiver: Receiver<Option<PathBuf>>,
}
