//! Per-entry output templates

use dispatch_core::domain::output::LogEntry;

const PLACEHOLDERS: [&str; 6] = ["command", "level", "time", "user", "node", "log"];

/// Template rendering a log entry to one line of text
///
/// Recognised placeholders are `%time`, `%level`, `%log`, `%user`, `%node`
/// and `%command`. Missing values render as empty strings; any other `%` is
/// copied as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    template: String,
}

impl OutputFormat {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, entry: &LogEntry) -> String {
        let mut out = String::with_capacity(self.template.len() + entry.log.len());
        let mut rest = self.template.as_str();

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos + 1..];
            match PLACEHOLDERS.iter().find(|name| tail.starts_with(**name)) {
                Some(name) => {
                    out.push_str(&field(entry, name));
                    rest = &tail[name.len()..];
                }
                None => {
                    out.push('%');
                    rest = tail;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn field(entry: &LogEntry, name: &str) -> String {
    match name {
        "time" => entry.time.clone().unwrap_or_default(),
        "level" => entry.level.to_string(),
        "log" => entry.log.clone(),
        "user" => entry.user.clone().unwrap_or_default(),
        "node" => entry.node.clone().unwrap_or_default(),
        "command" => entry.command.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::domain::output::LogLevel;

    fn entry() -> LogEntry {
        LogEntry {
            time: Some("09:15:00".to_string()),
            level: LogLevel::Warn,
            log: "disk at 91% on %node".to_string(),
            user: None,
            command: None,
            node: Some("db-2".to_string()),
        }
    }

    #[test]
    fn test_renders_placeholders() {
        let format = OutputFormat::new("%time [%level] %node: %log");
        assert_eq!(
            format.render(&entry()),
            "09:15:00 [WARN] db-2: disk at 91% on %node"
        );
    }

    #[test]
    fn test_missing_values_are_empty() {
        let format = OutputFormat::new("<%user>");
        assert_eq!(format.render(&entry()), "<>");
    }

    #[test]
    fn test_unknown_percent_is_literal() {
        let format = OutputFormat::new("100% %x %log");
        assert_eq!(format.render(&entry()), "100% %x disk at 91% on %node");
    }
}
