use anyhow::{bail, Context, Result};
use clap::Args;
use codetype_lib::{Api, Client, CodeTypeError, Payload, QueryParams, RequestOptions};

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct RequestArgs {
    /// HTTP verb: GET, POST, PUT or DELETE
    pub method: String,

    /// Path relative to the API base, or an absolute URL
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(long = "query", short = 'q')]
    pub query: Vec<String>,

    /// JSON request body
    #[arg(long)]
    pub body: Option<String>,

    /// Extra header as "Name: value" (repeatable)
    #[arg(long = "header", short = 'H')]
    pub headers: Vec<String>,
}

pub fn parse_query_pair(input: &str) -> Result<(String, String), CodeTypeError> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(CodeTypeError::InvalidInput(format!(
            "query parameter '{}' must look like key=value",
            input
        ))),
    }
}

pub fn parse_header(input: &str) -> Result<(String, String), CodeTypeError> {
    match input.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(CodeTypeError::InvalidInput(format!(
            "header '{}' must look like 'Name: value'",
            input
        ))),
    }
}

fn build_options(args: &RequestArgs) -> Result<RequestOptions> {
    let mut query = QueryParams::new();
    for pair in &args.query {
        let (key, value) = parse_query_pair(pair)?;
        query.insert(&key, value);
    }
    let mut options = RequestOptions::default().with_query(query);
    if let Some(body) = &args.body {
        let value = serde_json::from_str(body).context("--body must be valid JSON")?;
        options = options.with_body(value);
    }
    for header in &args.headers {
        let (name, value) = parse_header(header)?;
        options = options.with_header(&name, &value);
    }
    Ok(options)
}

/// JSON bodies follow `--output`; text bodies are printed as received.
fn print_payload(payload: &Payload, format: &OutputFormat) -> Result<()> {
    match payload {
        Payload::Json(value) => print_value(value, format),
        Payload::Text(text) => {
            println!("{}", text);
            Ok(())
        }
    }
}

/// Issues one request through the fetch-state hook and prints the body,
/// including the body of an error response.
pub async fn run(args: &RequestArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = build_options(args)?;
    let mut api = Api::new(client);
    match api.call_verb(&args.method, &args.path, options).await {
        Ok(payload) => print_payload(&payload, format),
        Err(e) => {
            if let Some(body) = e.body() {
                print_payload(body, format)?;
            }
            bail!(e)
        }
    }
}
