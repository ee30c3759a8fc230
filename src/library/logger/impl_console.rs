use crate::library::logger::interface::{join_namespace, Logger};
use chrono::Utc;
use std::io::Write;
use std::sync::Arc;

/// Writes timestamped lines to stderr. Stdout carries the verdict only.
#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
    verbose: bool,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset, verbose: bool) -> Self {
        Self {
            namespace: None,
            timezone,
            verbose,
        }
    }

    fn write_line(
        &self,
        level: &str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let utc_now = Utc::now();
        let local_time = utc_now.with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        let mut stderr = std::io::stderr().lock();
        match &self.namespace {
            Some(namespace) => writeln!(stderr, "[{}] {} {}: {}", formatted, level, namespace, message)?,
            None => writeln!(stderr, "[{}] {} {}", formatted, level, message)?,
        };
        Ok(())
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write_line("INFO", message)
    }

    fn debug(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if !self.verbose {
            return Ok(());
        }
        self.write_line("DEBUG", message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole {
            namespace: Some(join_namespace(&self.namespace, namespace)),
            timezone: self.timezone,
            verbose: self.verbose,
        })
    }
}
