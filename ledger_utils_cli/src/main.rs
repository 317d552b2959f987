use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default)]
    log_level: String,
    work_dir: Option<PathBuf>,
}

fn load_settings(config_path: &str) -> Result<Settings, anyhow::Error> {
    let mut conf = config::Config::new();
    conf.merge(config::File::with_name(config_path))?;
    conf.merge(config::Environment::with_prefix("app").separator("__"))?;
    Ok(conf.try_into()?)
}

fn run(settings: Settings) -> Result<(), anyhow::Error> {
    let level = ledger_bindings::logs::parse_level(&settings.log_level)?;
    ledger_bindings::logs::init(settings.work_dir.as_deref(), level)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    let mut processed = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = ledger_bindings::call_utils_method_json(line);
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
        processed += 1;
    }

    log::info!("stdin closed, {processed} requests processed");
    Ok(())
}

fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    assert!(
        args.len() == 2,
        "Specify a single argument for the path to the config file"
    );
    let config_path = &args[1];

    let settings = load_settings(config_path).expect("invalid config");

    if let Some(work_dir) = settings.work_dir.as_ref() {
        assert!(
            work_dir.is_dir(),
            "work_dir does not exist: {:?}",
            work_dir
        );
    }

    if let Err(err) = run(settings) {
        log::error!("stopped: {err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
