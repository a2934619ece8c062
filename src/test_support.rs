//! In-process HTTP server serving canned responses for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

/// One canned response, optionally held back before it is written
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: String,
    pub body: String,
    pub delay: Duration,
}

impl CannedResponse {
    pub fn new(status: &str, body: &str) -> Self {
        Self {
            status: status.to_string(),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub struct TestServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    arrivals: Arc<Mutex<Vec<Instant>>>,
    requests: mpsc::UnboundedReceiver<String>,
}

impl TestServer {
    /// Number of requests accepted so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Highest number of requests that were open at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Time each request was accepted, in order
    pub fn arrivals(&self) -> Vec<Instant> {
        self.arrivals.lock().map(|a| a.clone()).unwrap_or_default()
    }

    /// Raw head of the next received request
    pub async fn request(mut self) -> String {
        self.requests.recv().await.unwrap_or_default()
    }
}

/// Serve a single response for every request
pub async fn serve_once(status: &str, body: &str) -> TestServer {
    serve_sequence(vec![CannedResponse::new(status, body)]).await
}

/// Serve responses in order, repeating the last one once exhausted
pub async fn serve_sequence(responses: Vec<CannedResponse>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let hits = Arc::new(AtomicUsize::new(0));
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_in_flight = Arc::new(AtomicUsize::new(0));
    let arrivals = Arc::new(Mutex::new(Vec::new()));
    let (tx, requests) = mpsc::unbounded_channel();

    let server = TestServer {
        base_url,
        hits: Arc::clone(&hits),
        max_in_flight: Arc::clone(&max_in_flight),
        arrivals: Arc::clone(&arrivals),
        requests,
    };

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };

            let index = hits.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut arrivals) = arrivals.lock() {
                arrivals.push(Instant::now());
            }
            let open = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_flight.fetch_max(open, Ordering::SeqCst);

            let response = responses[index.min(responses.len() - 1)].clone();
            let in_flight = Arc::clone(&in_flight);
            let tx = tx.clone();

            // Each connection on its own task so overlapping requests are visible
            tokio::spawn(async move {
                let request = read_request_head(&mut stream).await;
                let _ = tx.send(request);

                time::sleep(response.delay).await;

                let raw = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    response.body.len(),
                    response.body
                );
                let _ = stream.write_all(raw.as_bytes()).await;
                let _ = stream.shutdown().await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            });
        }
    });

    server
}

/// Base URL nothing listens on
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Wrap a JSON payload in a minimal Next.js page
pub fn next_data_page(payload: &serde_json::Value) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Event</title></head><body>\
         <div id=\"__next\"></div>\
         <script id=\"__NEXT_DATA__\" type=\"application/json\">{}</script>\
         <script src=\"/_next/static/chunks/main.js\"></script></body></html>",
        payload
    )
}

async fn read_request_head(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
