mod common;

use std::time::Duration;

use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[tokio::test]
async fn test_main_server_startup() {
    let app = common::test_app(common::setup_db().await);

    // Port 0 lets the OS pick a free port
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_task: JoinHandle<()> = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let response = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("server did not respond");

    let status = response.status();
    let body: Value = response.json().await.unwrap();
    server_task.abort();

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");
}
