use tokio::sync::watch::channel;
use crate::download_receiver::DownloadReceiver;
use crate::download_sender::DownloadSender;
use crate::error::LoaderError;
use crate::progress_projector::ProgressSample;

pub fn new() -> (DownloadSender, DownloadReceiver) {
    let (progress_sender, progress_receiver) = channel(ProgressSample::default());
    let (status_sender, status_receiver) = channel(0u8);
    let (error_sender, error_receiver) = channel(LoaderError::None);
    let (payload_path_sender, payload_path_receiver) = channel(None);
    let sender = DownloadSender {
        progress_sender,
        status_sender,
        error_sender,
        payload_path_sender,
    };
    let receiver = DownloadReceiver {
        progress_receiver,
        status_receiver,
        error_receiver,
        payload_path_receiver,
    };
    (sender, receiver)
}
