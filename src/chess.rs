/*! Position and move validation

Validates FEN position strings and normalizes compact origin/destination
move codes into standard algebraic notation, backed by a full rules engine:
a move is only rendered if it is found in the legal-move set of the parsed
position. Failures are reported as `false`/`None`, never as errors; the
pipeline drops the offending record and moves on. !*/
use shakmaty::{fen::Fen, san::SanPlus, uci::Uci, CastlingMode, Chess};

/// Parse a FEN into a standard-rules position, checking structural
/// consistency (piece counts per rank, one king per side, side to move,
/// castling rights).
fn parse_position(fen: &str) -> Option<Chess> {
    fen.parse::<Fen>()
        .ok()?
        .into_position(CastlingMode::Standard)
        .ok()
}

/// Returns `true` if `fen` describes a legal standard chess position.
pub fn validate_fen(fen: &str) -> bool {
    parse_position(fen).is_some()
}

/// Convert a UCI move code to SAN for the given position.
///
/// Returns `None` if the FEN is invalid, the code is not syntactically a
/// move, or the move is illegal in the position.
pub fn uci_to_san(fen: &str, uci: &str) -> Option<String> {
    let pos = parse_position(fen)?;
    let m = uci.parse::<Uci>().ok()?.to_move(&pos).ok()?;
    Some(SanPlus::from_move(pos, &m).to_string())
}

#[cfg(test)]
mod tests {
    use super::{uci_to_san, validate_fen};

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn startpos_is_valid() {
        assert!(validate_fen(STARTPOS));
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(!validate_fen("not a fen at all"));
        assert!(!validate_fen(""));
    }

    #[test]
    fn kingless_board_is_invalid() {
        // parses as FEN but is not a consistent board state
        assert!(!validate_fen("8/8/8/8/8/8/8/8 w - - 0 1"));
    }

    #[test]
    fn pawn_push_to_san() {
        assert_eq!(uci_to_san(STARTPOS, "e2e4"), Some("e4".to_string()));
    }

    #[test]
    fn knight_move_to_san() {
        assert_eq!(uci_to_san(STARTPOS, "g1f3"), Some("Nf3".to_string()));
    }

    #[test]
    fn illegal_move_is_dropped() {
        // pawns cannot jump three squares; no best-effort guess
        assert_eq!(uci_to_san(STARTPOS, "e2e5"), None);
    }

    #[test]
    fn malformed_code_is_dropped() {
        assert_eq!(uci_to_san(STARTPOS, "castles"), None);
        assert_eq!(uci_to_san(STARTPOS, ""), None);
    }

    #[test]
    fn invalid_position_is_dropped() {
        assert_eq!(uci_to_san("8/8/8/8/8/8/8/8 w - - 0 1", "e2e4"), None);
    }

    #[test]
    fn promotion_with_check_suffix() {
        let fen = "7k/5P2/8/8/8/8/8/6K1 w - - 0 1";
        assert_eq!(uci_to_san(fen, "f7f8q"), Some("f8=Q+".to_string()));
    }
}
