use std::collections::HashMap;

use serde_json::Value;

use crate::internal::http::{HttpResponse, Outcome};

/// Printed when a helper produced no response to show.
const NO_RESPONSE: &str = "No response to handle";

/// Print one outcome to stdout: status, headers, then the body as
/// pretty-printed JSON when it parses, raw text otherwise. Failed outcomes
/// get the fixed absent message; the helper already logged the diagnostic.
pub fn handle_outcome(outcome: &Outcome) {
    match outcome {
        Ok(response) => print!("{}", format_response(response)),
        Err(_) => println!("{NO_RESPONSE}"),
    }
}

/// Assemble the printed form of a response.
pub fn format_response(response: &HttpResponse) -> String {
    let mut out = format!("Status Code: {}\n", response.status);

    if response.headers.is_empty() {
        out.push_str("Headers: (none)\n");
    } else {
        out.push_str("Headers:\n");
        out.push_str(&format_headers(&response.headers));
    }

    out.push_str(&format!("Elapsed: {} ms\n", response.elapsed.as_millis()));

    match response.json() {
        Ok(value) => {
            out.push_str(&format!("JSON Response: {}\n", pretty(&value)));
        }
        Err(_) => {
            // Not an error: non-JSON bodies fall back to text display.
            out.push_str(&format!("Text Response: {}\n", response.text()));
        }
    }

    out
}

/// Render headers one per line, sorted by name so output is stable.
fn format_headers(headers: &HashMap<String, String>) -> String {
    let mut names: Vec<&String> = headers.keys().collect();
    names.sort();
    let mut out = String::new();
    for name in names {
        out.push_str(&format!("  {name}: {}\n", headers[name]));
    }
    out
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
