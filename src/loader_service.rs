use std::sync::Arc;
use parking_lot::Mutex;
use reqwest::Client;
use crate::animation_surface::SurfaceHandle;
use crate::download_configuration::DownloadConfiguration;
use crate::download_operation::DownloadOperation;
use crate::download_tracker;
use crate::downloader::Downloader;
use crate::error::LoaderError;
use crate::progress_projector;
use crate::progress_projector::ProgressProjector;

/// The user-facing trigger. Wires one download attempt to the loader
/// animation: starts the looping indicator, spawns the transport and the
/// projection onto the surface.
///
/// One attempt at a time. Re-triggering while a download is in flight is
/// rejected, the slot frees once the attempt reaches a terminal status.
pub struct LoaderService {
    client: Arc<Client>,
    surface: SurfaceHandle,
    active: Mutex<Option<DownloadOperation>>,
}

impl LoaderService {
    pub fn new(surface: SurfaceHandle) -> LoaderService {
        LoaderService {
            client: Arc::new(Client::new()),
            surface,
            active: Mutex::new(None),
        }
    }

    pub fn start_download(&self, config: DownloadConfiguration) -> crate::error::Result<DownloadOperation> {
        let mut active = self.active.lock();
        if let Some(operation) = active.as_ref() {
            if !operation.is_done() {
                tracing::warn!("download already in flight, start ignored");
                return Err(LoaderError::DownloadInFlight);
            }
        }

        self.surface.begin_looping();

        let (sender, receiver) = download_tracker::new();
        let operation = DownloadOperation::new(receiver.clone());

        let mut downloader = Downloader::new(config, self.client.clone(), Arc::new(sender));
        downloader.start_download();

        let projector = ProgressProjector::new(self.surface.clone());
        tokio::spawn(progress_projector::drive(receiver, projector));

        *active = Some(operation.clone());
        Ok(operation)
    }
}
