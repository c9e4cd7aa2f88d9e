use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    prelude::*,
};

/// `-q` silences everything; otherwise each `-v` lowers the threshold one
/// level starting from warnings.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Diagnostics go to `console` and, when given, `log_file`. Standard output
/// carries only the score line, so nothing here may write to it.
fn build_subscriber<W>(
    verbosity: u8,
    quiet: bool,
    console: W,
    log_file: Option<File>,
) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let console_layer = fmt::layer()
        .with_writer(console)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .compact();

    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(console_layer)
        .with(file_layer)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file = log_file
        .map(|path| File::create(&path))
        .transpose()
        .map_err(CliError::Io)?;

    build_subscriber(verbosity, quiet, std::io::stderr, file).init();
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory stand-in for the console stream.
    #[derive(Clone, Default)]
    pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn capture(verbosity: u8, quiet: bool) -> (impl tracing::Subscriber + Send + Sync, CapturedLog) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = super::build_subscriber(verbosity, quiet, move || writer.clone(), None);
        (subscriber, log)
    }
}
