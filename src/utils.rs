//! Utility functions for common operations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a session-unique card id: `{prefix}-{millis}-{seq}`.
/// The sequence is process-wide and monotonic, so ids never collide even
/// within the same millisecond.
pub fn next_card_id(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, millis, seq)
}

/// Truncate to `max_chars` characters, ending with "..." when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }
    // Safely truncate using character boundaries
    let take_chars = max_chars.saturating_sub(3);
    let truncated: String = text.chars().take(take_chars).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_next_card_id_prefix() {
        let id = next_card_id("texte");
        assert!(id.starts_with("texte-"));
        assert_eq!(id.split('-').count(), 3);
    }

    #[test]
    fn test_next_card_id_unique_in_burst() {
        let ids: HashSet<String> = (0..1000).map(|_| next_card_id("avis")).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_truncate_chars_short() {
        assert_eq!(truncate_chars("Vidéo", 10), "Vidéo");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("Réassurance", 6), "Réa...");
    }
}
