//! Drives `BrawlClient` against a one-shot local HTTP responder.
use brawlstats_bot::api::{BrawlClient, ProfileError};
use brawlstats_bot::config::Config;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts a single connection, answers with the given status and body,
/// and yields the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });
    (format!("http://{addr}/v1"), handle)
}

fn client_for(base_url: String) -> BrawlClient {
    let config = Config::from_lookup(move |key| match key {
        "DISCORD_TOKEN" => Some("discord".to_string()),
        "BRAWL_API_KEY" => Some("test-key".to_string()),
        "BRAWL_API_URL" => Some(base_url.clone()),
        _ => None,
    })
    .unwrap();
    BrawlClient::new(&config).unwrap()
}

#[tokio::test]
async fn not_found_status_maps_to_api_error() {
    let (base, server) = serve_once("404 Not Found", r#"{"reason":"notFound"}"#).await;
    let client = client_for(base);

    let err = client.get_player("#py9j8q").await.unwrap_err();
    assert!(matches!(err, ProfileError::Api(404)));

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /v1/players/%23PY9J8Q HTTP/1.1"), "{request}");
    assert!(
        request.to_ascii_lowercase().contains("authorization: bearer test-key"),
        "{request}"
    );
}

#[tokio::test]
async fn ok_status_decodes_profile() {
    let (base, server) = serve_once(
        "200 OK",
        r##"{"tag":"#PY9J8Q","name":"Tester","trophies":10,"brawlers":[{"id":16000000,"name":"SHELLY","power":1,"trophies":10}]}"##,
    )
    .await;
    let client = client_for(base);

    let profile = client.get_player("PY9J8Q").await.unwrap();
    assert_eq!(profile.name, "Tester");
    assert_eq!(profile.brawlers.len(), 1);
    server.await.unwrap();
}

#[tokio::test]
async fn ok_status_with_empty_body_is_not_found() {
    let (base, server) = serve_once("200 OK", "").await;
    let client = client_for(base);

    let err = client.get_player("#A").await.unwrap_err();
    assert!(matches!(err, ProfileError::NotFound));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_api_is_transport_error() {
    // Grab a free port, then close it so the connect is refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{addr}/v1"));
    let err = client.get_player("#A").await.unwrap_err();
    assert!(matches!(err, ProfileError::Transport(_)));
    assert_eq!(err.user_message(), "❌ Could not reach the Brawl Stars API.");
}
