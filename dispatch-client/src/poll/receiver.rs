//! Delivery of decompacted output

use dispatch_core::domain::output::{LogEntry, LogLevel};

use super::format::OutputFormat;

/// Sink for the entries of one batch, called once per fetched batch
///
/// Empty slices are delivered too.
pub trait Receiver {
    fn receive(&mut self, entries: &[LogEntry]);
}

impl<F> Receiver for F
where
    F: FnMut(&[LogEntry]),
{
    fn receive(&mut self, entries: &[LogEntry]) {
        self(entries)
    }
}

/// Destinations a [`LevelRouter`] writes to
pub trait OutputChannels {
    fn output(&mut self, line: &str);
    fn warning(&mut self, line: &str);
    fn error(&mut self, line: &str);
    /// One coalesced marker for a non-empty batch in progress mode
    fn progress(&mut self);
}

/// Receiver routing entries to channels by level
///
/// WARN goes to the warning channel, ERROR to the error channel and every
/// other level to normal output. Quiet mode drops normal output. Progress
/// mode replaces per-entry output with a single marker per non-empty batch.
pub struct LevelRouter<C> {
    channels: C,
    progress: bool,
    quiet: bool,
    format: Option<OutputFormat>,
}

impl<C: OutputChannels> LevelRouter<C> {
    pub fn new(channels: C) -> Self {
        Self {
            channels,
            progress: false,
            quiet: false,
            format: None,
        }
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn format(mut self, format: Option<OutputFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn into_channels(self) -> C {
        self.channels
    }

    fn render(&self, entry: &LogEntry) -> String {
        match &self.format {
            Some(format) => format.render(entry),
            None => entry.log.clone(),
        }
    }
}

impl<C: OutputChannels> Receiver for LevelRouter<C> {
    fn receive(&mut self, entries: &[LogEntry]) {
        if self.progress {
            if !entries.is_empty() {
                self.channels.progress();
            }
            return;
        }

        for entry in entries {
            let line = self.render(entry);
            match entry.level {
                LogLevel::Warn => self.channels.warning(&line),
                LogLevel::Error => self.channels.error(&line),
                _ if self.quiet => {}
                _ => self.channels.output(&line),
            }
        }
    }
}
