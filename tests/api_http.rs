use gdp_chart::Client;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Serve `status_line` with `body` to every connection; count the requests.
fn serve(status_line: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            counter.fetch_add(1, Ordering::SeqCst);
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => req.extend_from_slice(&buf[..n]),
                }
            }
            let resp = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(resp.as_bytes());
        }
    });
    (format!("http://{addr}/GDP-data.json"), hits)
}

#[test]
fn server_error_is_not_retried() {
    let (url, hits) = serve("500 Internal Server Error", "");
    let err = Client::with_url(url).fetch_dataset().unwrap_err();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    let msg = format!("{err:#}");
    assert!(msg.contains("HTTP 500"), "unexpected error: {msg}");
}

#[test]
fn client_error_fails_with_status() {
    let (url, hits) = serve("404 Not Found", "");
    let err = Client::with_url(url).fetch_dataset().unwrap_err();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(format!("{err:#}").contains("HTTP 404"));
}

#[test]
fn successful_fetch_decodes_dataset() {
    let (url, hits) = serve(
        "200 OK",
        r#"{"source_name":"FRED","data":[["1947-01-01",243.1],["1947-04-01",246.3]]}"#,
    );
    let data = Client::with_url(url).fetch_dataset().unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(data.len(), 2);
    assert_eq!(data.points()[1].gdp, 246.3);
}
