/*!

# Null Object

A task wants to log as it goes, but not every caller wants logs. The tempting answer is an
optional logger and an `if let Some(logger)` in front of every log call. The null object
answer is a logger that does nothing: the task always has a logger, and "no logging" is just a
particular logger.

In Rust, `Option<Box<dyn Logger>>` is cheap and the compiler forces you to check it, so the
null-pointer bugs that motivate this pattern in C++ don't arise. The pattern is still worth
having for a different reason: it removes the branch from every call site. [`Task::execute`]
never asks whether it has a logger.

## You Already Use One

The `log` crate is a null object. Until a program installs a backend, every `log::info!`
goes to a built-in no-op logger. Libraries log unconditionally and never ask whether anyone is
listening. [`LogBridge`] closes the loop: it turns any [`Logger`] here into a `log` backend, so
the crate's own `debug!`/`trace!` output can be routed through a console or file logger, or
through a [`NullLogger`], which is exactly what no backend at all would do.

*/

use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub trait Logger {
    fn log(&self, message: &str);
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Prints `"Console: {message}"`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConsoleLogger {
    stream: Stream,
}

impl ConsoleLogger {
    pub fn new(stream: Stream) -> Self {
        Self { stream }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        match self.stream {
            Stream::Stdout => println!("Console: {message}"),
            Stream::Stderr => eprintln!("Console: {message}"),
        }
    }
}

/// Writes `"File: {message}"` lines to any writer.
pub struct FileLogger<W: Write> {
    sink: Mutex<W>,
}

impl<W: Write> FileLogger<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Logger for FileLogger<W> {
    fn log(&self, message: &str) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        // A logger has nowhere to report its own failures.
        let _ = writeln!(sink, "File: {message}");
    }
}

/// Collects `"Api: {message}"` entries, standing in for a remote logging service.
#[derive(Debug, Default)]
pub struct ApiLogger {
    sent: Mutex<Vec<String>>,
}

impl ApiLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Logger for ApiLogger {
    fn log(&self, message: &str) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format!("Api: {message}"));
    }
}

/// Does nothing, on purpose.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _message: &str) {}
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

/// Some unit of work that reports its progress.
pub struct Task<L: Logger = Box<dyn Logger>> {
    logger: L,
}

impl Default for Task {
    /// A task that logs to a [`NullLogger`].
    fn default() -> Self {
        Self {
            logger: Box::new(NullLogger),
        }
    }
}

impl<L: Logger> Task<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn execute(&self) {
        self.logger.log("Did some stuff");
        // The work would go here.
        self.logger.log("Did some other stuff");
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }
}

/// Installs a [`Logger`] as the `log` crate's backend.
pub struct LogBridge<L> {
    logger: L,
    level: LevelFilter,
}

impl<L: Logger + Send + Sync + 'static> LogBridge<L> {
    pub fn new(logger: L, level: LevelFilter) -> Self {
        Self { logger, level }
    }

    /// Sets this bridge as the global logger. Fails if a logger is already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl<L: Logger + Send + Sync> Log for LogBridge<L> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.logger.log(&format!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

/// A convenience for the common case: a [`FileLogger`] over standard error.
pub fn stderr_logger() -> FileLogger<io::Stderr> {
    FileLogger::new(io::stderr())
}
