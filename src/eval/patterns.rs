//! Window scores for Connect Four evaluation
//!
//! These constants define the scoring weights for the cell configurations a
//! single length-4 window can hold.

/// Window scores for evaluation
pub struct WindowScore;

impl WindowScore {
    /// Four of our pieces
    pub const FOUR: i64 = 100;
    /// Three of ours and one empty cell
    pub const OPEN_THREE: i64 = 5;
    /// Two of ours and two empty cells
    pub const OPEN_TWO: i64 = 2;
    /// Three opposing pieces and one empty cell: a threat to block
    pub const OPPONENT_THREE: i64 = -4;
    /// Per piece of ours in the centre column
    pub const CENTER_PIECE: i64 = 3;
}

/// Score a window from its counts of our pieces, opposing pieces and empty
/// cells. Mixed windows and lone pieces are worth nothing.
#[inline]
pub fn window_score(mine: usize, theirs: usize, empty: usize) -> i64 {
    match (mine, theirs, empty) {
        (4, 0, 0) => WindowScore::FOUR,
        (3, 0, 1) => WindowScore::OPEN_THREE,
        (2, 0, 2) => WindowScore::OPEN_TWO,
        (0, 3, 1) => WindowScore::OPPONENT_THREE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_score_hierarchy() {
        assert!(WindowScore::FOUR > WindowScore::OPEN_THREE);
        assert!(WindowScore::OPEN_THREE > WindowScore::OPEN_TWO);
        assert!(WindowScore::OPEN_TWO > 0);
        assert!(WindowScore::OPPONENT_THREE < 0);
    }

    #[test]
    fn test_window_score_table() {
        assert_eq!(window_score(4, 0, 0), 100);
        assert_eq!(window_score(3, 0, 1), 5);
        assert_eq!(window_score(2, 0, 2), 2);
        assert_eq!(window_score(0, 3, 1), -4);
    }

    #[test]
    fn test_window_score_zero_cases() {
        assert_eq!(window_score(0, 0, 4), 0);
        assert_eq!(window_score(1, 0, 3), 0);
        assert_eq!(window_score(3, 1, 0), 0);
        assert_eq!(window_score(2, 1, 1), 0);
        assert_eq!(window_score(1, 3, 0), 0);
        assert_eq!(window_score(0, 4, 0), 0);
        assert_eq!(window_score(0, 2, 2), 0);
    }
}
