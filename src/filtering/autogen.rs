//! Auto-generated game result detection.
//!
//! Study exports carry interface-generated comments ("1-0 White wins",
//! "so-and-so won on time") on terminal positions. They describe the game
//! result, not the position, so they are removed from the corpus.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PUNCT: Regex = Regex::new(r"[.,!?]").unwrap();

    /// Canonical result phrases. `{username}` is expanded with the record's
    /// username before matching.
    static ref RESULT_PHRASES: Vec<&'static str> = vec![
        "1-0 Black resigns",
        "1-0 White resigns",
        "0-1 White resigns",
        "0-1 Black resigns",
        "0-1 Black wins by checkmate",
        "1-0 White wins by checkmate",
        "1-0 White wins",
        "0-1 Black wins",
        "1/2-1/2 The game is a draw",
        "Game drawn by repetition",
        "Game drawn by agreement",
        "{username} won by resignation",
        "{username} won on time",
        "{username} won by checkmate",
        "White wins",
        "Black wins",
        "Game drawn",
        "Draw by repetition",
        "Draw by agreement",
        "1-0",
        "0-1",
        "1/2-1/2",
    ];
}

/// Detects commentary that exactly matches a canonical result phrase,
/// ignoring case and sentence punctuation.
#[derive(Default)]
pub struct AutoGenerated;

impl AutoGenerated {
    /// strip {.,!?} and lowercase, so "1-0 White resigns." and
    /// "1-0 white resigns" normalize to the same key.
    fn normalize(text: &str) -> String {
        PUNCT.replace_all(text.trim(), "").to_lowercase()
    }

    /// Returns `true` if `commentary` is an auto-generated result string.
    pub fn detect(&self, commentary: &str, username: &str) -> bool {
        let stripped = Self::normalize(commentary);
        RESULT_PHRASES.iter().any(|phrase| {
            let phrase = phrase.replace("{username}", username);
            Self::normalize(&phrase) == stripped
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AutoGenerated;

    #[test]
    fn result_with_punctuation() {
        let f = AutoGenerated::default();
        assert!(f.detect("1-0 White resigns.", "anyone"));
    }

    #[test]
    fn result_lowercased() {
        let f = AutoGenerated::default();
        assert!(f.detect("1-0 white resigns", "anyone"));
    }

    #[test]
    fn bare_result() {
        let f = AutoGenerated::default();
        assert!(f.detect("1/2-1/2", "anyone"));
        assert!(f.detect("Game drawn by repetition.", "anyone"));
    }

    #[test]
    fn username_template_expanded() {
        let f = AutoGenerated::default();
        assert!(f.detect("Magnus won on time", "Magnus"));
        assert!(f.detect("magnus won by checkmate!", "Magnus"));
        // another user's victory comment is not matched
        assert!(!f.detect("Magnus won on time", "Hikaru"));
    }

    #[test]
    fn authored_commentary_kept() {
        let f = AutoGenerated::default();
        assert!(!f.detect("White wins the exchange with this fork.", "anyone"));
        assert!(!f.detect("Resigning here is premature.", "anyone"));
    }
}
