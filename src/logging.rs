use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialise logging. When `debug` is set the default level is `debug` and
/// `RUST_LOG` may override it; otherwise `info` is forced. With a `log_file`
/// the output is appended to that file instead of stdout.
///
/// Calling this more than once is a no-op.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // Ignore `RUST_LOG` unless debug logging was asked for, so a stray
    // variable in the user's environment cannot turn on verbose output.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    match log_file.as_deref().and_then(split_log_path) {
        Some((dir, name)) => {
            let appender = tracing_appender::rolling::never(dir, name);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(appender)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

fn split_log_path(path: &std::path::Path) -> Option<(PathBuf, std::ffi::OsString)> {
    let name = path.file_name()?.to_os_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((dir, name))
}
