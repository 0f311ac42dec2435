// src/internal/demo/demo.rs

use std::collections::HashMap;
use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::internal::config::AppConfig;
use crate::internal::http::Client;
use crate::internal::render::handle_outcome;

/// Run the fixed demonstration sequence against the configured echo service.
///
/// Every example recovers from failure on its own; the sequence always runs
/// to the end and the process exits successfully regardless of outcomes.
pub async fn run(client: &Client, config: &AppConfig) {
    let base = config.demo.base_url.trim_end_matches('/');

    info!("Running demonstration sequence against {base}");

    banner("Example 1: Basic GET Request");
    let outcome = client.get(&format!("{base}/get")).await;
    handle_outcome(&outcome);
    separator();

    banner("Example 2: GET Request with Parameters");
    let params = HashMap::from([
        ("key1".to_string(), "value1".to_string()),
        ("key2".to_string(), "value2".to_string()),
    ]);
    let outcome = client.get_with_params(&format!("{base}/get"), &params).await;
    handle_outcome(&outcome);
    separator();

    banner("Example 3: POST Request with JSON");
    let json_data = json!({"name": "John Doe", "email": "john@example.com", "age": 30});
    let outcome = client.post_json(&format!("{base}/post"), &json_data, None).await;
    handle_outcome(&outcome);
    separator();

    banner("Example 4: POST Request with Form Data");
    let form_data = HashMap::from([
        ("username".to_string(), "user123".to_string()),
        ("password".to_string(), "pass123".to_string()),
    ]);
    let outcome = client.post_form(&format!("{base}/post"), &form_data, None).await;
    handle_outcome(&outcome);
    separator();

    banner("Example 5: Request with Custom Headers");
    let headers = HashMap::from([
        ("User-Agent".to_string(), "reqtour/0.1".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ]);
    let outcome = client
        .get_with_headers(&format!("{base}/headers"), &headers)
        .await;
    handle_outcome(&outcome);
    separator();

    banner("Example 6: PUT Request");
    let put_data = json!({"id": 1, "name": "Updated Name", "status": "active"});
    let outcome = client.put_json(&format!("{base}/put"), &put_data).await;
    handle_outcome(&outcome);
    separator();

    banner("Example 7: DELETE Request");
    let outcome = client.delete(&format!("{base}/delete")).await;
    handle_outcome(&outcome);
    separator();

    banner("Example 8: File Download");
    let dest = Path::new(&config.demo.download_path);
    match client.download_file(&format!("{base}/bytes/1024"), dest).await {
        Ok(report) => println!("Downloaded {} bytes to {}", report.bytes, report.path.display()),
        Err(err) => println!("Download failed: {err}"),
    }
}

fn banner(title: &str) {
    println!("=== {title} ===");
}

fn separator() {
    println!("\n{}\n", "=".repeat(50));
}
