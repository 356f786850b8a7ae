//! oltctl - provisioning client for OLT devices
//!
//! Validates connection credentials and port settings locally, forwards each
//! action to the provisioning backend over HTTP, and prints the backend's
//! answer. The backend owns the telnet session; this tool never touches it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oltctl::{client::OltClient, config::Config, http::HttpClient};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "oltctl")]
#[command(about = "OLT provisioning client", long_about = None)]
struct Args {
    /// Config file path (default: oltctl.toml, /etc/oltctl, ~/.config/oltctl)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides the config file)
    #[arg(long)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a telnet session to the OLT
    Connect {
        /// OLT management IP address
        #[arg(long)]
        ip: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Check whether a session is active
    Status {
        /// OLT management IP address
        #[arg(long)]
        ip: String,
    },

    /// Close the telnet session
    Disconnect {
        /// OLT management IP address
        #[arg(long)]
        ip: String,
    },

    /// Manage port/VLAN provisioning on a connected OLT
    #[command(subcommand)]
    Port(PortCommand),
}

#[derive(Subcommand, Debug)]
enum PortCommand {
    /// Apply a port/VLAN service configuration
    Configure(PortArgs),

    /// Show the current configuration of a port
    Status(PortArgs),

    /// Remove a port/VLAN service configuration
    Delete(PortArgs),
}

#[derive(clap::Args, Debug)]
struct PortArgs {
    /// OLT port as Frame/Slot/Port
    #[arg(long)]
    olt_port: String,

    /// VLAN ID (1-65535)
    #[arg(long)]
    vlan: String,

    /// Upstream port as Frame/Slot/Port
    #[arg(long)]
    upstream_port: String,

    /// Management IP of the OLT the session belongs to
    #[arg(long)]
    ip: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("oltctl: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    // Resolve configuration once; everything downstream gets it injected.
    let cfg = Config::load(args.config.as_deref())?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level)),
        )
        .init();

    let backend_url = args.backend_url.as_deref().unwrap_or(&cfg.backend.url);
    tracing::debug!("Using backend: {}", backend_url);

    let http = HttpClient::new(&cfg.http).context("Failed to build HTTP client")?;
    let olt = OltClient::new(backend_url, http);

    let outcome = match &args.command {
        Command::Connect {
            ip,
            username,
            password,
        } => olt.connect(ip, username, password),
        Command::Status { ip } => olt.session_status(ip),
        Command::Disconnect { ip } => olt.disconnect(ip),
        Command::Port(cmd) => match cmd {
            PortCommand::Configure(p) => {
                olt.configure_port(&p.olt_port, &p.vlan, &p.upstream_port, &p.ip)
            }
            PortCommand::Status(p) => {
                olt.port_status(&p.olt_port, &p.vlan, &p.upstream_port, &p.ip)
            }
            PortCommand::Delete(p) => {
                olt.delete_port(&p.olt_port, &p.vlan, &p.upstream_port, &p.ip)
            }
        },
    };

    // Every outcome is printed, never thrown; the exit code tells scripts
    // which way it went.
    match outcome {
        Ok(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
