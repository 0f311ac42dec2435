use std::env;

use anyhow::Result;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://httpbin.org";

fn main() -> Result<()> {
    let base = base_url();
    // Keep 4xx/5xx as data so status codes print like any other response
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    println!("=== Basic blocking requests ===");
    if let Err(err) = basic_requests(&agent, &base) {
        println!("Error occurred: {err}");
    }

    println!("\n=== Hand-encoded form POST ===");
    if let Err(err) = form_post(&agent, &base) {
        println!("Error occurred: {err}");
    }

    println!("\n=== Custom request headers ===");
    if let Err(err) = custom_headers(&agent, &base) {
        println!("Error occurred: {err}");
    }

    Ok(())
}

fn base_url() -> String {
    env::var("REQTOUR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// GET, JSON POST, and GET with query parameters through the agent's
/// high-level calls.
fn basic_requests(agent: &ureq::Agent, base: &str) -> Result<()> {
    let mut response = agent.get(&format!("{base}/get")).call()?;
    println!("Status Code: {}", response.status().as_u16());
    let body: Value = serde_json::from_str(&response.body_mut().read_to_string()?)?;
    println!("Response: {body}");

    let data = json!({"key": "value", "name": "John"});
    let mut response = agent
        .post(&format!("{base}/post"))
        .content_type("application/json")
        .send(data.to_string().as_bytes())?;
    println!("\nPOST Status Code: {}", response.status().as_u16());
    let body: Value = serde_json::from_str(&response.body_mut().read_to_string()?)?;
    println!("POST Response: {body}");

    let mut response = agent
        .get(&format!("{base}/get"))
        .query("param1", "value1")
        .query("param2", "value2")
        .call()?;
    println!("\nGET with params Status Code: {}", response.status().as_u16());
    let body: Value = serde_json::from_str(&response.body_mut().read_to_string()?)?;
    println!("GET with params Response: {body}");

    Ok(())
}

/// POST a body urlencoded by hand, with the content type set explicitly.
fn form_post(agent: &ureq::Agent, base: &str) -> Result<()> {
    let mut response = agent.get(&format!("{base}/get")).call()?;
    let body: Value = serde_json::from_str(&response.body_mut().read_to_string()?)?;
    println!("GET Response: {body}");

    let form = "key=value&name=John";
    let mut response = agent
        .post(&format!("{base}/post"))
        .content_type("application/x-www-form-urlencoded")
        .send(form.as_bytes())?;
    let body: Value = serde_json::from_str(&response.body_mut().read_to_string()?)?;
    println!("POST Response: {body}");

    Ok(())
}

/// GET carrying custom headers, including a static bearer token.
fn custom_headers(agent: &ureq::Agent, base: &str) -> Result<()> {
    let mut response = agent
        .get(&format!("{base}/headers"))
        .header("User-Agent", "reqtour-quickstart/0.1")
        .header("Accept", "application/json")
        .header("Authorization", "Bearer your_token_here")
        .call()?;
    let body: Value = serde_json::from_str(&response.body_mut().read_to_string()?)?;
    println!("Custom Headers Response: {body}");

    Ok(())
}
