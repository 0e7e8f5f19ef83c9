use sha2::{Digest, Sha256};

/// Short SHA-256 fingerprint (first 12 hex characters) used when logging
/// staged credential files, so log lines identify content without leaking it.
pub fn fingerprint(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let hex = format!("{:x}", hasher.finalize());
    hex[..12].to_string()
}
