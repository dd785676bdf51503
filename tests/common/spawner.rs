use std::process::Command;

use assert_cmd::cargo::cargo_bin;

pub const BASE_URL_VAR: &str = "TRANSACTION_POOL_BASE_URL";

pub struct SpawnerOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub log: String,
}

impl SpawnerOutput {
    pub fn contains(&self, message: &str) -> bool {
        self.log.contains(message)
    }
}

/// Runs the compiled binary once, pointed at `base_url` when one is given.
pub fn run_spawner(base_url: Option<&str>) -> SpawnerOutput {
    run_spawner_with_timeout(base_url, "5")
}

pub fn run_spawner_with_timeout(base_url: Option<&str>, timeout_secs: &str) -> SpawnerOutput {
    let mut command = Command::new(cargo_bin("transaction_spawner"));
    command
        .env_remove(BASE_URL_VAR)
        .env("TRANSACTION_POOL_TIMEOUT_SECS", timeout_secs)
        .env("RUST_LOG", "info");

    if let Some(base_url) = base_url {
        command.env(BASE_URL_VAR, base_url);
    }

    let output = command.output().unwrap();

    let mut log = String::from_utf8_lossy(&output.stdout).to_string();
    log.push_str(&String::from_utf8_lossy(&output.stderr));
    println!("{}", log);

    SpawnerOutput {
        success: output.status.success(),
        code: output.status.code(),
        log,
    }
}
