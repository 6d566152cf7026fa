//! Image download demo.
//!
//! Downloads an image to disk while a console rendition of the loader
//! animation follows the progress.
//!
//! Usage: cargo run --example image_download

use std::path::Path;
use std::time::Duration;
use image_loader_rs::animation_surface;
use image_loader_rs::animation_surface::{AnimationSurface, PlaybackComplete};
use image_loader_rs::download_configuration::DownloadConfiguration;
use image_loader_rs::download_status::DownloadStatus;
use image_loader_rs::loader_service::LoaderService;

/// Console stand-in for the vector animation view.
struct ConsoleSurface;

impl AnimationSurface for ConsoleSurface {
    fn set_animation_progress(&mut self, fraction: f64) {
        println!("animation progress: {:.3}", fraction);
    }

    fn set_looping(&mut self, looping: bool) {
        println!("loader looping: {}", looping);
    }

    fn play_to_progress(&mut self, target: f64, on_complete: PlaybackComplete) {
        println!("playing forward to {:.0}%", target * 100.0);
        on_complete();
    }

    fn present_payload(&mut self, location: &Path) {
        println!("image ready: {}", location.display());
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let surface = animation_surface::spawn(ConsoleSurface);
    let service = LoaderService::new(surface);

    let config = DownloadConfiguration::new()
        .set_url("https://picsum.photos/1200/800.jpg")
        .set_file_path("./downloads/image.jpg")
        .create_dir(true)
        .set_timeout(30)
        .build()
        .expect("Invalid download configuration");

    let operation = service
        .start_download(config)
        .expect("A download is already running");

    loop {
        match operation.status() {
            DownloadStatus::Download => {
                println!(
                    "Downloading: {}% ({} / {} bytes)",
                    operation.progress_sample().display_percent(),
                    operation.downloaded_size(),
                    operation.total_size()
                );
            }
            DownloadStatus::Decode => {
                println!("Verifying image...");
            }
            DownloadStatus::Complete => {
                println!("Download complete!");
                break;
            }
            DownloadStatus::Failed => {
                eprintln!("Download failed: {}", operation.error());
                break;
            }
            _ => {}
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
    }
}
