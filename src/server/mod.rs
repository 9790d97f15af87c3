//! Local preview server with optional rebuild on change

use anyhow::Result;
use axum::Router;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::commands;
use crate::Devlog;

/// Quiet period before a burst of file events triggers a rebuild
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Router serving the output directory, with `404.html` for missing paths
pub fn router(output_dir: &Path) -> Router {
    let not_found = ServeFile::new(output_dir.join("404.html"));
    let files = ServeDir::new(output_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found);

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Serve the output directory until interrupted
pub async fn start(devlog: &Devlog, ip: &str, port: u16, watch: bool) -> Result<()> {
    let app = router(&devlog.paths.output_dir);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    if watch {
        let devlog = devlog.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_rebuild(devlog) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Rebuild the whole site whenever the posts or the config change
fn watch_and_rebuild(devlog: Devlog) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(DEBOUNCE, tx)?;

    let source_dir = &devlog.paths.source_dir;
    if source_dir.exists() {
        debouncer
            .watcher()
            .watch(source_dir, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", source_dir);
    }

    let config_path = &devlog.paths.config_path;
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    for result in rx {
        match result {
            Ok(events) => {
                let changed: Vec<_> = events
                    .iter()
                    .filter(|e| is_relevant(&e.path))
                    .collect();
                if changed.is_empty() {
                    continue;
                }

                println!();
                for event in &changed {
                    println!("File changed: {}", event.path.display());
                }

                // Config edits apply on the next build
                let devlog = devlog.reload();
                if let Err(e) = commands::build::run(&devlog) {
                    println!("Build failed: {:#}", e);
                }
            }
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
            }
        }
    }

    Ok(())
}

/// Skip hidden files and editor backups
fn is_relevant(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !name.starts_with('.') && !name.ends_with('~')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    async fn get(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            path
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        String::from_utf8_lossy(&response).to_lowercase()
    }

    #[tokio::test]
    async fn test_serves_output_with_404_page() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("index.html"), "<p>home</p>").unwrap();
        fs::write(tmp.path().join("404.html"), "<p>gone</p>").unwrap();
        fs::write(tmp.path().join("rss.xml"), "<rss/>").unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(tmp.path());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let home = get(addr, "/").await;
        assert!(home.starts_with("http/1.1 200"));
        assert!(home.contains("content-type: text/html"));
        assert!(home.contains("<p>home</p>"));

        let feed = get(addr, "/rss.xml").await;
        assert!(feed.starts_with("http/1.1 200"));
        assert!(feed.contains("xml"));

        let missing = get(addr, "/nope.html").await;
        assert!(missing.starts_with("http/1.1 404"));
        assert!(missing.contains("<p>gone</p>"));
    }

    #[test]
    fn test_is_relevant() {
        assert!(is_relevant(Path::new("/site/devlog/001-a.md")));
        assert!(is_relevant(Path::new("/site/devlog.config.json")));
        assert!(!is_relevant(Path::new("/site/devlog/.001-a.md.swp")));
        assert!(!is_relevant(Path::new("/site/devlog/001-a.md~")));
    }
}
