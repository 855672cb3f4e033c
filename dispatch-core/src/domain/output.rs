//! Execution console output types

use serde::{Deserialize, Serialize};

/// Server status label of an execution that finished successfully
pub const EXEC_STATE_SUCCEEDED: &str = "succeeded";

/// One response to an execution output query
///
/// `offset` and `last_modified` are opaque cursor tokens: the next query must
/// send them back exactly as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputBatch {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub unmodified: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub empty: bool,
    #[serde(default, deserialize_with = "lenient::int")]
    pub offset: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub completed: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub exec_completed: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_failed_nodes: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub exec_state: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub last_modified: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub exec_duration: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub percent_loaded: f64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_size: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub entries: Vec<LogEntry>,
}

impl OutputBatch {
    /// Both the output stream and the execution itself are finished
    pub fn is_done(&self) -> bool {
        self.exec_completed && self.completed
    }

    /// Whether the server reported the execution as succeeded
    pub fn succeeded(&self) -> bool {
        self.exec_state == EXEC_STATE_SUCCEEDED
    }
}

/// A single console log entry
///
/// On the wire one entry may hold several lines joined by newlines; the
/// polling engine splits those before delivery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub level: LogLevel,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub log: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
}

impl LogEntry {
    /// Copy of this entry carrying different text
    pub fn with_log(&self, log: impl Into<String>) -> Self {
        Self {
            log: log.into(),
            ..self.clone()
        }
    }
}

/// Log level reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Normal,
    Verbose,
    Debug,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Normal => write!(f, "NORMAL"),
            LogLevel::Verbose => write!(f, "VERBOSE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Other => write!(f, "OTHER"),
        }
    }
}

/// Deserializers for fields the server encodes inconsistently
mod lenient {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Float(f64),
        Str(String),
    }

    /// Accepts a JSON number, a numeric string, or null (as zero)
    pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<IntOrString>::deserialize(deserializer)? {
            None => Ok(0),
            Some(IntOrString::Int(v)) => Ok(v),
            Some(IntOrString::Float(v)) if is_whole(v) => Ok(v as i64),
            Some(IntOrString::Float(v)) => Err(de::Error::custom(format!(
                "cursor value {v} is not an integer"
            ))),
            Some(IntOrString::Str(s)) if s.trim().is_empty() => Ok(0),
            Some(IntOrString::Str(s)) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid integer: {s}"))),
        }
    }

    fn is_whole(v: f64) -> bool {
        v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64
    }

    /// Reads null as the type's default, e.g. a null entry list as empty
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Accepts an identifier sent either as a string or as a number
    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<IntOrString>::deserialize(deserializer)? {
            None => None,
            Some(IntOrString::Int(v)) => Some(v.to_string()),
            Some(IntOrString::Float(v)) => Some(v.to_string()),
            Some(IntOrString::Str(s)) => Some(s),
        })
    }
}
