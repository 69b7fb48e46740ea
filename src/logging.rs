use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging, which includes every outbound Notion request
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // stdout carries query results, so diagnostics go to stderr
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file_appender = tracing_appender::rolling::daily(
            log_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("notion-graphql.log")),
        );

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("notion_graphql={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_to_crate() {
        assert_eq!(default_directive(false), "notion_graphql=info");
        assert_eq!(default_directive(true), "notion_graphql=debug");
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
