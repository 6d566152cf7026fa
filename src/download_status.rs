use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DownloadStatus {
    None,
    Head,
    Download,
    Finalize,
    Decode,
    Complete,
    Failed,
}

impl Display for DownloadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadStatus::None => write!(f, "None"),
            DownloadStatus::Head => write!(f, "Head"),
            DownloadStatus::Download => write!(f, "Download"),
            DownloadStatus::Finalize => write!(f, "Finalize"),
            DownloadStatus::Decode => write!(f, "Decode"),
            DownloadStatus::Complete => write!(f, "Complete"),
            DownloadStatus::Failed => write!(f, "Failed"),
        }
    }
}

impl From<DownloadStatus> for u8 {
    fn from(status: DownloadStatus) -> u8 {
        match status {
            DownloadStatus::None => 0,
            DownloadStatus::Head => 1,
            DownloadStatus::Download => 2,
            DownloadStatus::Finalize => 3,
            DownloadStatus::Decode => 4,
            DownloadStatus::Complete => 5,
            DownloadStatus::Failed => 6,
        }
    }
}

impl From<u8> for DownloadStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => DownloadStatus::None,
            1 => DownloadStatus::Head,
            2 => DownloadStatus::Download,
            3 => DownloadStatus::Finalize,
            4 => DownloadStatus::Decode,
            5 => DownloadStatus::Complete,
            6 => DownloadStatus::Failed,
            _ => DownloadStatus::None,
        }
    }
}
