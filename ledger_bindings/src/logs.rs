use std::path::Path;

use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";
const LOG_FILE_NAME: &str = "ledger.log";

const CONSOLE_APPENDER: &str = "stderr";
const FILE_APPENDER: &str = "log_file";

/// Installs the global logger. Console output goes to stderr so stdout stays
/// free for responses. With `work_dir` set, logs are also appended to `ledger.log` there.
pub fn init(work_dir: Option<&Path>, level: LevelFilter) -> Result<(), anyhow::Error> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut config =
        Config::builder().appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)));
    let mut root = Root::builder().appender(CONSOLE_APPENDER);

    if let Some(work_dir) = work_dir {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(work_dir.join(LOG_FILE_NAME))?;
        config = config.appender(Appender::builder().build(FILE_APPENDER, Box::new(file)));
        root = root.appender(FILE_APPENDER);
    }

    let config = config.build(root.build(level))?;
    log4rs::init_config(config)?;

    log::debug!("logger started, level: {level}");
    Ok(())
}

/// Empty input means `info`.
pub fn parse_level(level: &str) -> Result<LevelFilter, anyhow::Error> {
    let level = level.trim();
    if level.is_empty() {
        return Ok(LevelFilter::Info);
    }
    level
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid log level: {level}"))
}
