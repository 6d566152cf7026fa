use std::path::PathBuf;
use crate::animation_surface::SurfaceHandle;
use crate::download_receiver::DownloadReceiver;
use crate::download_status::DownloadStatus;
use crate::error::LoaderError;

/// A single byte-level progress observation reported by the transport.
///
/// `total_bytes_expected` stays 0 while the total is unknown.
/// `bytes_written` never decreases within one download attempt.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct ProgressSample {
    pub bytes_written: u64,
    pub total_bytes_expected: u64,
}

impl ProgressSample {
    pub fn new(bytes_written: u64, total_bytes_expected: u64) -> ProgressSample {
        ProgressSample {
            bytes_written,
            total_bytes_expected,
        }
    }

    /// Normalized completion in [0.0, 1.0]. An unknown total maps to 0.0.
    pub fn fraction(&self) -> f64 {
        if self.total_bytes_expected == 0 {
            return 0f64;
        }
        let total_length = self.total_bytes_expected as f64;
        let bytes_written = self.bytes_written as f64;
        (bytes_written / total_length).clamp(0f64, 1f64)
    }

    /// Percentage rounded to one decimal place. Display only, the animation
    /// is always fed the unrounded fraction.
    pub fn display_percent(&self) -> f64 {
        ((self.fraction() * 100f64) * 10f64).round() / 10f64
    }
}

/// Terminal signal of a download attempt, produced once and consumed once.
#[derive(Debug, Clone)]
pub enum DownloadOutcome {
    Completed(PathBuf),
    Failed(LoaderError),
}

/// Maps the transport's progress stream onto the loader animation.
///
/// Progress samples become plain assignments of the animation progress
/// slot. The terminal outcome becomes the finish-once transition: stop
/// looping, play forward to 100%, loop again. The transition fires at most
/// once per attempt no matter how often a terminal signal is delivered.
pub struct ProgressProjector {
    surface: SurfaceHandle,
    completion_fired: bool,
}

impl ProgressProjector {
    pub fn new(surface: SurfaceHandle) -> ProgressProjector {
        ProgressProjector {
            surface,
            completion_fired: false,
        }
    }

    /// Forwards the sample's fraction to the surface progress slot and
    /// returns it.
    pub fn on_progress(&self, sample: ProgressSample) -> f64 {
        let fraction = sample.fraction();
        tracing::trace!("{}%", sample.display_percent());
        self.surface.set_progress(fraction);
        fraction
    }

    /// Runs the terminal transition for this attempt.
    pub fn on_completion(&mut self, outcome: DownloadOutcome) {
        if self.completion_fired {
            return;
        }
        self.completion_fired = true;

        match outcome {
            DownloadOutcome::Completed(path) => {
                tracing::info!("download complete: {}", path.display());
                self.surface.finish_once(path);
            }
            DownloadOutcome::Failed(error) => {
                tracing::error!("download failed: {}", error);
                self.surface.restore_looping();
            }
        }
    }
}

/// Bridges the transport's notification channels into the projector.
///
/// Forwards every changed sample, then fires the completion exactly once
/// when the status turns terminal. A transport that goes away without a
/// terminal status counts as failed, the indicator must never hang.
pub async fn drive(mut receiver: DownloadReceiver, mut projector: ProgressProjector) {
    loop {
        tokio::select! {
            changed = receiver.progress_receiver.changed() => {
                if changed.is_err() {
                    projector.on_completion(DownloadOutcome::Failed(LoaderError::DownloadTask));
                    return;
                }
                let sample = *receiver.progress_receiver.borrow_and_update();
                projector.on_progress(sample);
            }
            changed = receiver.status_receiver.changed() => {
                if changed.is_err() {
                    projector.on_completion(DownloadOutcome::Failed(LoaderError::DownloadTask));
                    return;
                }
                let status = DownloadStatus::from(*receiver.status_receiver.borrow_and_update());
                match status {
                    DownloadStatus::Complete => {
                        let sample = *receiver.progress_receiver.borrow_and_update();
                        projector.on_progress(sample);
                        let payload_path = receiver.payload_path_receiver.borrow().clone();
                        match payload_path {
                            Some(path) => {
                                projector.on_completion(DownloadOutcome::Completed(path));
                            }
                            None => {
                                projector.on_completion(DownloadOutcome::Failed(LoaderError::DownloadTask));
                            }
                        }
                        return;
                    }
                    DownloadStatus::Failed => {
                        let error = receiver.error_receiver.borrow().clone();
                        projector.on_completion(DownloadOutcome::Failed(error));
                        return;
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;
    use std::time::Duration;
    use crate::animation_surface;
    use crate::animation_surface::test_support::{wait_until, RecordingSurface};
    use crate::download_status::DownloadStatus;
    use crate::download_tracker;
    use crate::error::LoaderError;
    use crate::progress_projector;
    use crate::progress_projector::{DownloadOutcome, ProgressProjector, ProgressSample};

    #[test]
    fn test_fraction_unknown_total() {
        assert_eq!(ProgressSample::new(0, 0).fraction(), 0.0);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(ProgressSample::new(50, 100).fraction(), 0.5);
        assert_eq!(ProgressSample::new(100, 100).fraction(), 1.0);
    }

    #[test]
    fn test_fraction_clamps_overshoot() {
        assert_eq!(ProgressSample::new(150, 100).fraction(), 1.0);
    }

    #[test]
    fn test_fraction_monotonic() {
        let mut last = 0.0;
        for bytes_written in (0..=1000).step_by(37) {
            let fraction = ProgressSample::new(bytes_written, 1000).fraction();
            assert!((0.0..=1.0).contains(&fraction));
            assert!(fraction >= last);
            last = fraction;
        }
    }

    #[test]
    fn test_display_percent() {
        assert_eq!(ProgressSample::new(55, 1000).display_percent(), 5.5);
        assert_eq!(ProgressSample::new(1, 3).display_percent(), 33.3);
        assert_eq!(ProgressSample::new(100, 100).display_percent(), 100.0);
    }

    #[tokio::test]
    async fn test_projection_scenario() {
        let (surface, recorded) = RecordingSurface::new();
        let handle = animation_surface::spawn(surface);
        handle.begin_looping();

        let mut projector = ProgressProjector::new(handle);
        let mut fractions = Vec::new();
        for sample in [
            ProgressSample::new(10, 100),
            ProgressSample::new(55, 100),
            ProgressSample::new(100, 100),
        ] {
            fractions.push(projector.on_progress(sample));
        }
        assert_eq!(fractions, vec![0.1, 0.55, 1.0]);

        projector.on_completion(DownloadOutcome::Completed(PathBuf::from("image.jpg")));

        wait_until(|| recorded.lock().play_targets.len() == 1).await;
        let recorded = recorded.lock();
        assert_eq!(recorded.progress, vec![0.1, 0.55, 1.0]);
        assert_eq!(recorded.play_targets, vec![1.0]);
    }

    #[tokio::test]
    async fn test_completion_fires_once() {
        let (surface, recorded) = RecordingSurface::new();
        let handle = animation_surface::spawn(surface);
        handle.begin_looping();

        let mut projector = ProgressProjector::new(handle);
        projector.on_completion(DownloadOutcome::Completed(PathBuf::from("image.jpg")));
        projector.on_completion(DownloadOutcome::Completed(PathBuf::from("image.jpg")));

        wait_until(|| recorded.lock().play_targets.len() == 1).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        let recorded = recorded.lock();
        assert_eq!(recorded.play_targets, vec![1.0]);
        assert_eq!(recorded.presented.len(), 1);
        // stop looping for the finish playback, loop again when it lands
        assert_eq!(recorded.looping, vec![true, false, true]);
    }

    #[tokio::test]
    async fn test_drive_success() {
        let (surface, recorded) = RecordingSurface::new();
        let handle = animation_surface::spawn(surface);
        handle.begin_looping();

        let (sender, receiver) = download_tracker::new();
        let projector = ProgressProjector::new(handle);
        tokio::spawn(progress_projector::drive(receiver, projector));

        let _ = sender.progress_sender.send(ProgressSample::new(100, 100));
        let _ = sender
            .payload_path_sender
            .send(Some(PathBuf::from("image.jpg")));
        let _ = sender
            .status_sender
            .send(DownloadStatus::Complete.into());

        wait_until(|| recorded.lock().play_targets.len() == 1).await;
        let recorded = recorded.lock();
        assert_eq!(recorded.play_targets, vec![1.0]);
        assert_eq!(recorded.progress.last(), Some(&1.0));
        assert_eq!(recorded.presented, vec![PathBuf::from("image.jpg")]);
    }

    #[tokio::test]
    async fn test_drive_failure_restores_looping() {
        let (surface, recorded) = RecordingSurface::new();
        let handle = animation_surface::spawn(surface);
        handle.begin_looping();

        let (sender, receiver) = download_tracker::new();
        let projector = ProgressProjector::new(handle);
        tokio::spawn(progress_projector::drive(receiver, projector));

        let _ = sender.error_sender.send(LoaderError::Request);
        let _ = sender.status_sender.send(DownloadStatus::Failed.into());

        wait_until(|| recorded.lock().looping.len() == 2).await;
        let recorded = recorded.lock();
        assert_eq!(recorded.looping, vec![true, true]);
        assert!(recorded.play_targets.is_empty());
        assert!(recorded.presented.is_empty());
    }

    #[tokio::test]
    async fn test_drive_dropped_transport_counts_as_failure() {
        let (surface, recorded) = RecordingSurface::new();
        let handle = animation_surface::spawn(surface);
        handle.begin_looping();

        let (sender, receiver) = download_tracker::new();
        let projector = ProgressProjector::new(handle);
        tokio::spawn(progress_projector::drive(receiver, projector));

        drop(sender);

        wait_until(|| recorded.lock().looping.len() == 2).await;
        let recorded = recorded.lock();
        assert_eq!(recorded.looping, vec![true, true]);
        assert!(recorded.play_targets.is_empty());
    }
}
