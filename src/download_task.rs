use std::sync::Arc;
use std::time::Duration;
use futures::StreamExt;
use reqwest::Client;
use crate::download_configuration::DownloadConfiguration;
use crate::download_sender::DownloadSender;
use crate::error::LoaderError;
use crate::progress_projector::ProgressSample;
use crate::stream::Stream;

pub struct DownloadTask {
    config: Arc<DownloadConfiguration>,
}

impl DownloadTask {
    pub fn new(config: Arc<DownloadConfiguration>) -> DownloadTask {
        DownloadTask {
            config,
        }
    }

    /// Streams the payload into `sink`, publishing one progress sample per
    /// received chunk. Returns the number of bytes written.
    pub async fn start_download(
        &mut self,
        client: Arc<Client>,
        sink: &mut Stream,
        sender: &Arc<DownloadSender>,
        mut total_bytes_expected: u64,
    ) -> crate::error::Result<u64> {
        let mut request = client.get(&self.config.url);
        if self.config.timeout > 0 {
            request = request.timeout(Duration::from_secs(self.config.timeout));
        }

        let result = request.send().await;

        match result {
            Ok(response) => {
                match response.error_for_status() {
                    Ok(response) => {
                        if total_bytes_expected == 0 {
                            total_bytes_expected = response.content_length().unwrap_or(0);
                            let _ = sender.progress_sender.send(ProgressSample::new(0, total_bytes_expected));
                        }

                        let mut bytes_written = 0u64;
                        let mut body = response.bytes_stream();
                        while let Some(chunk) = body.next().await {
                            match chunk {
                                Ok(bytes) => {
                                    sink.write_async(&bytes).await?;
                                    bytes_written += bytes.len() as u64;
                                    let _ = sender.progress_sender.send(ProgressSample::new(bytes_written, total_bytes_expected));
                                }
                                Err(_e) => {
                                    return Err(LoaderError::ResponseChunk);
                                }
                            }
                        }
                        sink.flush_async().await?;

                        if total_bytes_expected == 0 {
                            // The server never told us the total, the finished
                            // stream length is the total.
                            let _ = sender.progress_sender.send(ProgressSample::new(bytes_written, bytes_written));
                        }

                        Ok(bytes_written)
                    }
                    Err(_e) => {
                        Err(LoaderError::Response)
                    }
                }
            }
            Err(_e) => {
                Err(LoaderError::Request)
            }
        }
    }
}
