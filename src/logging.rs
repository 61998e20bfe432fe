use env_logger::{Builder, Target};
use log::{debug, LevelFilter};

pub const LOG_ENV_VAR: &str = "LIVE_EVENTS_LOG";

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "reqwest::async_impl::client",
    "reqwest::connect",
    "hyper_util::client",
];

pub fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Splits "info,live_events_lib::pipeline=debug" into a default level and per-module levels
pub fn parse_log_spec(spec: &str) -> (LevelFilter, Vec<(String, LevelFilter)>) {
    let mut default = LevelFilter::Info;
    let mut modules = Vec::new();
    for pair in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match pair.split_once('=') {
            Some((module, level)) => modules.push((module.trim().to_string(), get_log_level(level))),
            None => default = get_log_level(pair),
        }
    }
    (default, modules)
}

/// Priority: CLI argument, then env var, then `info`
pub fn init_logger(user_log_level: Option<&str>) {
    let log_level = user_log_level
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_ENV_VAR).ok())
        .unwrap_or_else(|| "info".to_string());

    let mut log_builder = Builder::new();
    log_builder.target(Target::Stdout);

    let (default, modules) = parse_log_spec(&log_level);
    log_builder.filter_level(default);
    for (module, level) in &modules {
        log_builder.filter_module(module, *level);
    }
    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }
    // a second init (tests, embedding) keeps the first logger
    if log_builder.try_init().is_ok() {
        debug!("Log level {}", default);
    }
}
