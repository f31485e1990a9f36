//! Weather Query Service - Main Entry Point
//!
//! A backend service that:
//! 1. Accepts weather queries over HTTP (current, forecast, or historical)
//! 2. Fetches data from the OpenWeatherMap API
//! 3. Persists normalized records in PostgreSQL
//! 4. Returns the normalized records to the caller
//!
//! Usage:
//!   cargo run --release                 # Listen on the default port 8080
//!   cargo run --release -- --port 9090  # Listen on port 9090
//!
//! Environment:
//!   DATABASE_URL - PostgreSQL connection string
//!   OWM_API_KEY  - OpenWeatherMap API credential

use meteo_service::config::Config;
use meteo_service::{db, endpoint};
use std::env;

const DEFAULT_PORT: u16 = 8080;

fn main() {
    println!("🌦  Weather Query Service");
    println!("=========================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut port = DEFAULT_PORT;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(p) => port = p,
                        Err(_) => {
                            eprintln!("Error: invalid port number: {}", args[i + 1]);
                            std::process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--port PORT]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load configuration: the API credential is required
    println!("🔑 Loading configuration...");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n❌ Configuration error: {}\n", e);
            std::process::exit(1);
        }
    };
    println!("✓ Configuration loaded\n");

    // Validate database connectivity and bootstrap the schema
    println!("📊 Initializing database...");
    let mut client = match db::connect_with_validation() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("\n❌ Database initialization failed: {}\n", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = db::init_schema(&mut client) {
        eprintln!("\n❌ Schema bootstrap failed: {}\n", e);
        std::process::exit(1);
    }
    drop(client);
    println!("✓ Database ready\n");

    // Run the endpoint loop: one request at a time, to completion
    if let Err(e) = endpoint::start_endpoint_server(port, config) {
        eprintln!("\n❌ Endpoint server error: {}", e);
        std::process::exit(1);
    }
}
