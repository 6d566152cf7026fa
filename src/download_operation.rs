use std::path::PathBuf;
use crate::download_receiver::DownloadReceiver;
use crate::download_status::DownloadStatus;
use crate::error::LoaderError;
use crate::progress_projector::ProgressSample;

/// Cloneable polling handle for one download attempt.
#[derive(Clone)]
pub struct DownloadOperation {
    download_receiver: DownloadReceiver,
}

impl DownloadOperation {
    pub fn new(download_receiver: DownloadReceiver) -> DownloadOperation {
        DownloadOperation {
            download_receiver,
        }
    }

    pub fn status(&self) -> DownloadStatus {
        DownloadStatus::from(*self.download_receiver.status_receiver.borrow())
    }

    pub fn progress_sample(&self) -> ProgressSample {
        *self.download_receiver.progress_receiver.borrow()
    }

    pub fn downloaded_size(&self) -> u64 {
        self.progress_sample().bytes_written
    }

    pub fn total_size(&self) -> u64 {
        self.progress_sample().total_bytes_expected
    }

    pub fn progress(&self) -> f64 {
        self.progress_sample().fraction()
    }

    pub fn error(&self) -> LoaderError {
        self.download_receiver.error_receiver.borrow().clone()
    }

    /// Location of the finished payload, set right before the attempt
    /// turns `Complete`.
    pub fn payload_path(&self) -> Option<PathBuf> {
        self.download_receiver.payload_path_receiver.borrow().clone()
    }

    pub fn is_done(&self) -> bool {
        matches!(
            self.status(),
            DownloadStatus::Complete | DownloadStatus::Failed
        )
    }
}
