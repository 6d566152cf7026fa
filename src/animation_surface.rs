use std::path::{Path, PathBuf};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};
use crate::loader_state::LoaderState;

pub type PlaybackComplete = Box<dyn FnOnce() + Send>;

/// The visual component showing the loader animation and the final image,
/// implemented by the embedding application.
///
/// Every method is invoked from the surface driver task, never concurrently.
pub trait AnimationSurface: Send + 'static {
    /// Assigns the animation progress slot. Idempotent, safe to call
    /// repeatedly with the same fraction.
    fn set_animation_progress(&mut self, fraction: f64);

    /// Enables or disables free-running looped playback.
    fn set_looping(&mut self, looping: bool);

    /// Plays forward from the current progress to `target`, then invokes
    /// `on_complete` exactly once.
    fn play_to_progress(&mut self, target: f64, on_complete: PlaybackComplete);

    /// Hands over the downloaded payload once it is ready to show.
    fn present_payload(&mut self, location: &Path);
}

pub enum SurfaceCommand {
    SetProgress(f64),
    BeginLooping,
    FinishOnce(PathBuf),
    RestoreLooping,
    PlaybackDone,
}

/// Cheap cloneable handle that marshals commands onto the surface driver
/// task. Senders never touch the surface directly.
#[derive(Clone)]
pub struct SurfaceHandle {
    sender: UnboundedSender<SurfaceCommand>,
}

impl SurfaceHandle {
    pub fn set_progress(&self, fraction: f64) {
        let _ = self.sender.send(SurfaceCommand::SetProgress(fraction));
    }

    pub fn begin_looping(&self) {
        let _ = self.sender.send(SurfaceCommand::BeginLooping);
    }

    pub fn finish_once(&self, payload: PathBuf) {
        let _ = self.sender.send(SurfaceCommand::FinishOnce(payload));
    }

    pub fn restore_looping(&self) {
        let _ = self.sender.send(SurfaceCommand::RestoreLooping);
    }
}

/// Spawns the driver task owning `surface` and returns the handle feeding
/// it. The driver is the single execution context for all surface
/// mutations and runs the loader state machine.
pub fn spawn<S>(surface: S) -> SurfaceHandle
where
    S: AnimationSurface,
{
    let (sender, receiver) = unbounded_channel();
    let weak_sender = sender.downgrade();
    tokio::spawn(run_surface(surface, receiver, weak_sender));
    SurfaceHandle { sender }
}

async fn run_surface<S>(
    mut surface: S,
    mut receiver: UnboundedReceiver<SurfaceCommand>,
    weak_sender: WeakUnboundedSender<SurfaceCommand>,
) where
    S: AnimationSurface,
{
    let mut state = LoaderState::Idle;
    while let Some(command) = receiver.recv().await {
        match command {
            SurfaceCommand::SetProgress(fraction) => {
                surface.set_animation_progress(fraction);
            }
            SurfaceCommand::BeginLooping | SurfaceCommand::RestoreLooping => {
                state = state.begin_looping();
                if state == LoaderState::Looping {
                    surface.set_looping(true);
                }
            }
            SurfaceCommand::FinishOnce(payload) => {
                if state != LoaderState::Looping {
                    continue;
                }
                state = state.finish_once();
                surface.present_payload(&payload);
                surface.set_looping(false);
                let weak_sender = weak_sender.clone();
                surface.play_to_progress(1f64, Box::new(move || {
                    if let Some(sender) = weak_sender.upgrade() {
                        let _ = sender.send(SurfaceCommand::PlaybackDone);
                    }
                }));
            }
            SurfaceCommand::PlaybackDone => {
                state = state.playback_done();
                if state == LoaderState::Looping {
                    surface.set_looping(true);
                }
            }
        }
        tracing::trace!("loader state: {}", state);
    }
}
