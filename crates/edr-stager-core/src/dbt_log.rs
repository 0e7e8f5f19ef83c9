//! Scanning dbt structured-log output for the stager's version message.
//!
//! With `--log-format json` dbt prints one JSON object per line. The staging
//! project's `get_elementary_dbt_pkg_version` operation logs a message of the
//! form `edr_stager: <version>`; depending on the dbt release the message
//! text sits under `info.msg` or `data.msg`.

use serde::Deserialize;

/// Prefix of the log message carrying the package version.
pub const STAGER_PREFIX: &str = "edr_stager: ";

#[derive(Debug, Deserialize)]
struct LogLine {
    #[serde(default)]
    info: Option<MsgSection>,
    #[serde(default)]
    data: Option<MsgSection>,
}

#[derive(Debug, Deserialize)]
struct MsgSection {
    #[serde(default)]
    msg: Option<String>,
}

impl LogLine {
    /// The message text, preferring `info.msg` and falling back to
    /// `data.msg`. Empty strings count as absent.
    fn message(&self) -> Option<&str> {
        msg_of(self.info.as_ref()).or_else(|| msg_of(self.data.as_ref()))
    }
}

fn msg_of(section: Option<&MsgSection>) -> Option<&str> {
    section
        .and_then(|s| s.msg.as_deref())
        .filter(|msg| !msg.is_empty())
}

/// Extract the version reported in `stdout`, if any.
///
/// Lines that are not JSON objects of the expected shape are skipped. The
/// first message starting with [`STAGER_PREFIX`] ends the scan; whatever
/// follows the prefix is trimmed and returned, with an empty remainder
/// treated as no report at all.
pub fn extract_stager_version(stdout: &str) -> Option<String> {
    for line in stdout.lines() {
        let record: LogLine = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(_) => continue,
        };
        let message = match record.message() {
            Some(message) => message,
            None => continue,
        };
        if let Some(rest) = message.strip_prefix(STAGER_PREFIX) {
            let rest = rest.trim();
            if rest.is_empty() {
                return None;
            }
            return Some(rest.to_string());
        }
    }
    None
}
