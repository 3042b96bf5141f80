//! Enriches a canned response and prints every derived view.
//!
//! Run with logging enabled to watch the extractors fire lazily:
//!
//! ```text
//! RUST_LOG=stealth_requests=debug cargo run --example enrich
//! ```

use stealth_requests::prelude::*;

const PAGE: &str = r#"<html>
<head>
    <title>Acme Directory</title>
    <meta name="description" content="Company directory">
    <meta name="keywords" content="directory, staff">
    <link rel="canonical" href="https://acme.test/directory">
</head>
<body>
    <p>Reach us at hello@acme.test or (800) 555-0199.</p>
    <a href="/about">About</a>
    <a href="https://status.acme.test">Status</a>
    <img src="/logo.png">
    <table>
        <thead><tr><th>Name</th><th>Office</th></tr></thead>
        <tbody>
            <tr><td>Alice</td><td>Oslo</td></tr>
            <tr><td>Bob</td><td>Lima</td></tr>
        </tbody>
    </table>
</body>
</html>"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw = RawResponse::new(PAGE.as_bytes().to_vec(), PAGE, "https://acme.test/people", 200);
    let resp = StealthResponse::new(raw, 0.42);

    println!("{resp}");
    println!("title:  {:?}", resp.meta().title);
    println!("links:  {:?}", resp.links());
    println!("images: {:?}", resp.images());
    println!("emails: {:?}", resp.emails());
    println!("phones: {:?}", resp.phone_numbers());
    for record in resp.tables() {
        for (header, column) in record {
            println!("column {header}: {column:?}");
        }
    }
}
