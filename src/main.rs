use std::{process, time::Duration};

use anyhow::{Context, Result};
use isahc::{config::Configurable, HttpClient};
use util::initialize_logger;

use crate::{builder::FixtureBuilder, sender::Sender, spawner::Spawner, util::Config};

#[macro_use]
extern crate log;

mod builder;
mod model;
mod sender;
mod spawner;
mod transport;
mod util;

fn run() -> Result<()> {
    let config = Config::read()
        .validate()
        .context("Invalid configuration")?;

    let client = HttpClient::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Could not create HTTP client")?;

    info!("Spawning transaction to {}", config.base_url);

    let spawner = Spawner::new(FixtureBuilder, Sender::new(client), &config.base_url);
    spawner
        .spawn_transaction()
        .context("Could not spawn transaction")?;

    Ok(())
}

fn main() {
    initialize_logger();

    if let Err(err) = run() {
        error!("{:#}", err);
        process::exit(1);
    }
}
