// Shared fixtures for the integration tests

use photo_match::MatchClient;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Bytes standing in for a JPEG; kept ASCII so body matchers can see them
pub const SELFIE_BYTES: &[u8] = b"fake-jpeg-bytes";

pub fn selfie_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("selfie-")
        .suffix(".jpg")
        .tempfile()
        .unwrap();
    file.write_all(SELFIE_BYTES).unwrap();
    file.flush().unwrap();
    file
}

pub fn client(base_url: &str) -> MatchClient {
    MatchClient::new(base_url, Duration::from_secs(5)).unwrap()
}

/// Accepts connections and never answers them
pub async fn silent_server() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    (format!("http://{}", addr), handle)
}

/// Address nothing is listening on
pub fn refused_addr() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
