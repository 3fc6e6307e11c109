//! Best-score record
//!
//! One non-negative integer persisted under [`STORAGE_KEY`]. Anything that
//! can't be read back as such counts as "no record yet".

use crate::persistence::{KeyValueStore, StoreError};

/// Storage key (LocalStorage on web)
pub const STORAGE_KEY: &str = "flappyKiroHighScore";

/// Parse a stored value leniently: optional leading whitespace and sign,
/// then a run of decimal digits. Trailing garbage after the digits is
/// ignored. Values past `u32::MAX` saturate. Negative, empty or
/// non-numeric values yield `None`.
pub fn parse_high_score(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Only digits remain, so a parse error means overflow
    let value: u32 = digits[..end].parse().unwrap_or(u32::MAX);
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// Load the best score; every failure mode reads as 0
pub fn load(store: &impl KeyValueStore) -> u32 {
    match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => match parse_high_score(&raw) {
            Some(score) => {
                log::info!("Loaded high score: {}", score);
                score
            }
            None => {
                log::warn!("Stored high score {:?} is corrupt, starting fresh", raw);
                0
            }
        },
        Ok(None) => {
            log::info!("No high score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Failed to load high score: {}", e);
            0
        }
    }
}

/// Persist the best score
pub fn save(store: &mut impl KeyValueStore, score: u32) -> Result<(), StoreError> {
    store.set(STORAGE_KEY, &score.to_string())?;
    log::info!("High score saved ({})", score);
    Ok(())
}
