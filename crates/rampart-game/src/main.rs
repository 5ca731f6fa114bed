//! Rampart core entry point.
//!
//! Boots the core exactly as an embedding application would: parse CLI
//! arguments, load configuration, initialize structured logging, detect the
//! network role, and build the session with removal sync attached. The full
//! game executable layers a transport, gameplay tick, and UI on top of the
//! session built here.
//!
//! Run with: `cargo run -p rampart-game -- --headless`

use clap::Parser;
use rampart_config::{CliArgs, Config, default_config_dir};
use rampart_game::Session;
use rampart_multiplayer::{NetClient, Role, RoleHandle};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    let mut config = match args.config.clone().or_else(default_config_dir) {
        Some(dir) => Config::load_or_create(&dir).unwrap_or_else(|err| {
            eprintln!("config unavailable ({err}), using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    rampart_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    // Role detection: a headless process hosts; a windowed one starts
    // offline and becomes a client when a connection opens.
    let role = RoleHandle::new(if args.headless {
        Role::Server
    } else {
        Role::Offline
    });
    let net_client = NetClient::new();

    let _session = match Session::initialize(role.clone(), net_client.removal_sender()) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "session bootstrap failed");
            std::process::exit(1);
        }
    };

    info!(
        role = ?role.get(),
        server = %config.network.server_address,
        port = config.network.server_port,
        max_players = config.network.max_players,
        pending_removals = net_client.pending_removals(),
        "session ready"
    );
}
