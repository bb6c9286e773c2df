// SPDX-License-Identifier: MPL-2.0

//! Channel polling example.
//!
//! Logs in, lists every channel, then polls the controller and prints each
//! detected change.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example poll_events -- <controller_url> [username] [password] [interval_ms]
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Factory credentials, poll every second
//! cargo run --example poll_events -- 192.168.1.50:8444
//!
//! # Custom credentials, poll every 500 ms, with debug logging
//! RUST_LOG=eqoweb_lib=debug cargo run --example poll_events -- 192.168.1.50:8444 QBUS secret 500
//! ```

use std::env;
use std::time::Duration;

use eqoweb_lib::{Client, HttpConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <controller_url> [username] [password] [interval_ms]",
            args[0]
        );
        std::process::exit(1);
    }

    let mut config = HttpConfig::new(&args[1]);
    if let Some(user) = args.get(2) {
        let password = args.get(3).map_or("", String::as_str);
        config = config.with_credentials(user, password);
    }
    let interval = args
        .get(4)
        .map(|ms| ms.parse::<u64>())
        .transpose()?
        .map_or(Duration::from_secs(1), Duration::from_millis);

    let mut client = Client::new(config)?;
    client.login().await?;

    println!("Channels:");
    for channel in client.channels(true).await? {
        println!("  [{}] {channel}", channel.group_name);
    }

    println!("\nPolling every {interval:?}, press Ctrl+C to stop.");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            () = tokio::time::sleep(interval) => {}
        }

        match client.events().await {
            Ok(events) => {
                for event in events.values() {
                    match event.previous_value() {
                        Some(previous) => {
                            println!("{} changed from {previous}", event.channel());
                        }
                        None => println!("{}", event.channel()),
                    }
                }
            }
            Err(e) => eprintln!("Polling failed: {e}"),
        }
    }

    Ok(())
}
