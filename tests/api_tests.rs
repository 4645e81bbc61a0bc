use cricket_stats::api::{Discipline, StatsClient};
use cricket_stats::utils::error::ApiError;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serve `responses` in order, one per connection, and return the request lines seen
fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}/stats", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut request_lines = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            request_lines.push(request_line.trim_end().to_string());

            // Drain headers
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        request_lines
    });

    (uri, handle)
}

#[test]
fn test_fetch_table_sends_discipline_query() {
    let body = r#"{"name": {"0": "Smith"}, "catches": {"0": 2}, "run_outs": {"0": 0}}"#;
    let (uri, handle) = serve(vec![(200, body.to_string())]);

    let client = StatsClient::new(uri).unwrap();
    let table = client.fetch_table(Discipline::Fielding).unwrap();

    assert_eq!(table["name"]["0"], "Smith");

    let requests = handle.join().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("GET /stats?discipline=fielding "));
}

#[test]
fn test_fetch_all_in_order() {
    let (uri, handle) = serve(vec![
        (200, "[]".to_string()),
        (200, "[]".to_string()),
        (200, "[]".to_string()),
    ]);

    let client = StatsClient::new(uri).unwrap();
    let raw = client.fetch_all().unwrap();
    assert!(raw.batting.as_array().unwrap().is_empty());

    let requests = handle.join().unwrap();
    let disciplines: Vec<&str> = requests
        .iter()
        .filter_map(|line| line.split("discipline=").nth(1))
        .filter_map(|rest| rest.split(' ').next())
        .collect();
    assert_eq!(disciplines, vec!["batting", "bowling", "fielding"]);
}

#[test]
fn test_error_status_is_invalid_response() {
    let (uri, handle) = serve(vec![(500, r#"{"error": "boom"}"#.to_string())]);

    let client = StatsClient::new(uri).unwrap();
    let result = client.fetch_table(Discipline::Batting);

    match result {
        Err(ApiError::InvalidResponse(message)) => assert!(message.contains("500")),
        other => panic!("expected InvalidResponse, got {:?}", other),
    }
    handle.join().unwrap();
}

#[test]
fn test_unparseable_body_is_an_error() {
    let (uri, handle) = serve(vec![(200, "not json".to_string())]);

    let client = StatsClient::new(uri).unwrap();
    assert!(client.fetch_table(Discipline::Bowling).is_err());
    handle.join().unwrap();
}

#[test]
fn test_unreachable_server_fails() {
    // Bind then drop to get a port nothing listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let client = StatsClient::new(format!("http://127.0.0.1:{}/stats", port)).unwrap();
    assert!(matches!(
        client.fetch_table(Discipline::Batting),
        Err(ApiError::RequestFailed(_))
    ));
}
