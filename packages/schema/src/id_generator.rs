use crc32fast::Hasher;
use std::time::{SystemTime, UNIX_EPOCH};

/// Derive a short, stable seed from a session key using CRC32
pub fn get_session_seed(key: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential block id generator for one editing session
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String, // Session seed (CRC32)
    count: u32,   // Sequential counter
}

impl IDGenerator {
    pub fn new(key: &str) -> Self {
        Self {
            seed: get_session_seed(key),
            count: 0,
        }
    }

    /// Generator seeded from the current time and process id, so ids from
    /// separate sessions do not collide when their blocks are combined
    pub fn for_session() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        Self::new(&format!("{}:{}", std::process::id(), nanos))
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
