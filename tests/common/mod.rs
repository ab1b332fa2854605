//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string, e.g. "/api/history?limit=5"
    pub target: String,
    pub body: String,
}

/// Minimal canned-response HTTP backend for exercising the client.
///
/// Serves one connection at a time on a background thread, routes by
/// "METHOD /path" (query string ignored for routing, recorded for
/// assertions), and closes each connection after responding. Unrouted
/// requests get a 404.
pub struct MockBackend {
    pub base_url: String,
    routes: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock backend");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let routes: Arc<Mutex<HashMap<String, (u16, String)>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let thread_routes = Arc::clone(&routes);
        let thread_requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let _ = handle_connection(stream, &thread_routes, &thread_requests);
            }
        });

        Self { base_url, routes, requests }
    }

    /// Register a canned response for "METHOD /path".
    pub fn route(&self, method_and_path: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(method_and_path.to_string(), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle_connection(
    mut stream: TcpStream,
    routes: &Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: &Arc<Mutex<Vec<RecordedRequest>>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        if line == "\r\n" || line == "\n" || line.is_empty() {
            break;
        }
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut body_bytes = vec![0u8; content_length];
    reader.read_exact(&mut body_bytes)?;
    let body = String::from_utf8_lossy(&body_bytes).to_string();

    requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        target: target.clone(),
        body,
    });

    let path = target.split('?').next().unwrap_or_default();
    let key = format!("{method} {path}");
    let (status, response_body) = routes
        .lock()
        .unwrap()
        .get(&key)
        .cloned()
        .unwrap_or((404, String::new()));

    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {length}\r\nConnection: close\r\n\r\n{response_body}",
        reason = reason_phrase(status),
        length = response_body.len(),
    )?;
    stream.flush()
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    }
}

/// A five-entry history payload in backend shape, newest first.
pub fn history_json() -> String {
    let entries: Vec<String> = (1..=5)
        .map(|i| {
            let best_yield = if i == 1 {
                "0.0523".to_string()
            } else if i == 2 {
                "null".to_string()
            } else {
                format!("0.0{}", 40 + i)
            };
            format!(
                r#"{{
                    "id": "log-{i}",
                    "createdAt": "2025-11-0{i}T10:30:00Z",
                    "params": {{
                        "minPrice": 100000, "maxPrice": 200000,
                        "area": "Area {i}", "bedrooms": 3,
                        "minSqft": 500, "maxSqft": 900
                    }},
                    "averageRent": 1850,
                    "propertiesCount": {i},
                    "bestYield": {best_yield}
                }}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}
