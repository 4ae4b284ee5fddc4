//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single fixed status and body (or a redirect) for every GET and
//! counts the requests it received, so tests can assert that no network call
//! happened.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub struct PageServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl PageServer {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Fixed answer for every GET.
#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    body: String,
    location: Option<String>,
}

/// Starts a server in a background thread answering every request with
/// `status` and `body`. The server runs until the process exits.
pub fn start(status: u16, body: &str) -> PageServer {
    spawn(Reply {
        status,
        body: body.to_string(),
        location: None,
    })
}

/// Starts a server answering every request with a `status` redirect to `location`.
pub fn start_redirect(status: u16, location: &str) -> PageServer {
    spawn(Reply {
        status,
        body: String::new(),
        location: Some(location.to_string()),
    })
}

fn spawn(reply: Reply) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let reply = Arc::new(reply);
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let reply = Arc::clone(&reply);
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &reply, &counter));
        }
    });
    PageServer {
        url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

/// Starts a server that reads the request and never answers.
pub fn start_silent(hold: Duration) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                let mut buf = [0u8; 8192];
                if matches!(stream.read(&mut buf), Ok(n) if n > 0) {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
                thread::sleep(hold);
            });
        }
    });
    PageServer {
        url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

/// A URL on a local port nobody listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, reply: &Reply, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let method = std::str::from_utf8(&buf[..n])
        .ok()
        .and_then(|r| r.split_whitespace().next())
        .unwrap_or("");
    hits.fetch_add(1, Ordering::SeqCst);

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    let location = reply
        .location
        .as_deref()
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {} {}\r\n{}Content-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reason(reply.status),
        location,
        reply.body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(reply.body.as_bytes());
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
