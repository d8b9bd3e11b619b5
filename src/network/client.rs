//! Background content loader: fetches the dev server page or reads the
//! packaged entry file and reports back to the UI thread.

use std::path::Path;
use std::sync::mpsc::Sender as StdSender;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tokio::sync::mpsc::Receiver;

use crate::error::{Result, ShellError};
use crate::network::{LoadRequest, LoadedDocument, LoaderMessage};
use crate::types::ContentSource;

// ── Loader Loop ────────────────────────────────────────────────────────────────

/// Long-running async loop: serves [`LoadRequest`]s and forwards a
/// [`LoaderMessage`] per request to the UI thread.
///
/// Each request runs in its own task so a slow dev server never delays a
/// reload. Exits when the request channel is closed (UI shut down).
pub async fn run_loader_loop(
    tx: &StdSender<LoaderMessage>,
    ctx: &egui::Context,
    mut requests: Receiver<LoadRequest>,
) {
    let http = reqwest::Client::new();

    while let Some(req) = requests.recv().await {
        log::debug!(
            "Load #{} of {} (ignore_cache={})",
            req.generation,
            req.source,
            req.ignore_cache
        );

        let tx = tx.clone();
        let ctx = ctx.clone();
        let http = http.clone();
        tokio::spawn(async move {
            let msg = match load(&http, &req).await {
                Ok(document) => LoaderMessage::Loaded {
                    generation: req.generation,
                    document,
                },
                Err(e) => {
                    log::debug!("Load #{} failed: {e}", req.generation);
                    LoaderMessage::Failed {
                        generation: req.generation,
                        error: e.to_string(),
                    }
                }
            };
            if tx.send(msg).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    log::info!("Content loader shut down.");
}

/// Load one request. No retries: the first failure is the outcome.
pub async fn load(http: &reqwest::Client, req: &LoadRequest) -> Result<LoadedDocument> {
    let body = match &req.source {
        ContentSource::Url(url) => fetch(http, url, req.ignore_cache).await?,
        ContentSource::File(path) => tokio::fs::read_to_string(path).await?,
    };

    Ok(LoadedDocument {
        bytes: body.len(),
        preload_found: preload_exists(&req.preload).await,
    })
}

async fn fetch(http: &reqwest::Client, url: &str, ignore_cache: bool) -> Result<String> {
    let mut builder = http.get(url);
    if ignore_cache {
        builder = builder
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache");
    }

    let resp = builder.send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ShellError::Status(status));
    }
    Ok(resp.text().await?)
}

async fn preload_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn file_request(dir: &Path, generation: u64) -> LoadRequest {
        LoadRequest {
            generation,
            source: ContentSource::File(dir.join("index.html")),
            preload: dir.join("preload.js"),
            ignore_cache: false,
        }
    }

    #[tokio::test]
    async fn loads_packaged_file_and_detects_preload() {
        let dir = tempfile::tempdir().unwrap();
        let html = "<title>Calc</title><div id=root></div>";
        std::fs::write(dir.path().join("index.html"), html).unwrap();
        std::fs::write(dir.path().join("preload.js"), "// preload").unwrap();

        let doc = load(&reqwest::Client::new(), &file_request(dir.path(), 1))
            .await
            .unwrap();
        assert_eq!(doc.bytes, html.len());
        assert!(doc.preload_found);
    }

    #[tokio::test]
    async fn missing_preload_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>hi</p>").unwrap();

        let doc = load(&reqwest::Client::new(), &file_request(dir.path(), 1))
            .await
            .unwrap();
        assert!(!doc.preload_found);
    }

    #[tokio::test]
    async fn missing_entry_file_fails_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&reqwest::Client::new(), &file_request(dir.path(), 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ShellError::Io(_)));
    }

    #[tokio::test]
    async fn loop_reports_outcomes_and_exits_on_close() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>loop</p>").unwrap();

        let (tx, rx) = mpsc::channel();
        let (req_tx, req_rx) = tokio::sync::mpsc::channel(4);
        req_tx.send(file_request(dir.path(), 7)).await.unwrap();
        drop(req_tx);

        let ctx = egui::Context::default();
        run_loader_loop(&tx, &ctx, req_rx).await;
        // Let the spawned load task finish.
        for _ in 0..100 {
            tokio::task::yield_now().await;
            if let Ok(msg) = rx.try_recv() {
                assert_eq!(msg.generation(), 7);
                assert!(matches!(msg, LoaderMessage::Loaded { .. }));
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("loader never reported");
    }
}
