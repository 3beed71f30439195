//! Minimal sarcdoc binary: no argument parsing, no options.
//!
//! Run `sarcdoc` in a directory containing `sarcdoc.toml` and the site is
//! served on 127.0.0.1. The port is OS-assigned unless `SARCDOC_PORT` is set.
//!
//! Exit codes:
//! - 0: never (the server runs until interrupted)
//! - 1: error (config not found or invalid, server failed to start)

use std::env;
use std::process;

use sarcdoc_base::pal::http::HttpServerConfig;
use sarcdoc_base::tracing::init_tracing;
use sarcdoc_base::{FilePath, PalHandle, RealPal};
use sarcdoc_engine::catalog::sample_endpoints;
use sarcdoc_engine::playground::Playground;
use sarcdoc_engine::{ApiService, load_config};

fn main() {
    init_tracing().unwrap();

    let current_dir = env::current_dir().unwrap_or_else(|e| {
        eprintln!("Error: Failed to get current directory: {}", e);
        process::exit(1);
    });

    let pal = PalHandle::new(RealPal::new(current_dir));

    let config_path = FilePath::from("sarcdoc.toml");
    let config = match load_config(&pal, &config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config from sarcdoc.toml: {}", e);
            process::exit(1);
        }
    };

    println!("Configuration loaded: {}", config.title);

    let mut server_config = HttpServerConfig::new("127.0.0.1");
    if let Ok(port) = env::var("SARCDOC_PORT") {
        match port.parse::<u16>() {
            Ok(port) => server_config = server_config.with_port(port),
            Err(_) => {
                eprintln!("Error: SARCDOC_PORT is not a valid port number: {}", port);
                process::exit(1);
            }
        }
    }

    let service = ApiService::new(config, sample_endpoints(), Playground::sample());

    let handle = match pal.start_http_server(Box::new(service), server_config) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: Failed to start HTTP server: {}", e);
            process::exit(1);
        }
    };

    println!("Serving documentation at http://{}", handle.address("127.0.0.1"));

    // The handle keeps the server alive; park until interrupted.
    loop {
        std::thread::park();
    }
}
