use discbot::board::{Board, Color};
use discbot::perft::perft;
use discbot::rules::{Directions, Rules, TerminalRule, FULL_BOARD_THRESHOLD};
use discbot::search::minimax::minimax;
use discbot::search::Searcher;

// Black has no placement (eight directions) while White still has five.
const STUCK_BLACK: &str = "WWWWWWWWWWWWWWW.WWWWBBBWWWWBWBBWWWBBBWBWW..BWWWW...BBBBW...BBBB.";

fn stuck() -> Board {
    Board::from_text(STUCK_BLACK, Color::Black).unwrap()
}

#[test]
fn side_to_move_rule_ends_when_mover_is_stuck() {
    let b = stuck();
    let narrow = Rules::new(Directions::All, TerminalRule::SideToMove);
    let both = Rules::new(Directions::All, TerminalRule::BothSides);
    assert!(narrow.legal_moves(&b, Color::Black).is_empty());
    assert_eq!(both.legal_moves(&b, Color::White).len(), 5);
    assert!(narrow.is_terminal(&b, Color::Black));
    assert!(!both.is_terminal(&b, Color::Black));
}

#[test]
fn search_passes_through_stuck_side_under_both_sides_rule() {
    let b = stuck();
    let rules = Rules::new(Directions::All, TerminalRule::BothSides);
    let expected = [(1, -16, 2), (2, -25, 7), (3, -23, 12)];
    for (depth, score, nodes) in expected {
        let r = Searcher::new(rules).search_depth(&b, Color::Black, depth);
        assert_eq!(r.bestmove, None);
        assert_eq!(r.score, score, "depth {depth}");
        assert_eq!(r.nodes, nodes, "depth {depth}");
        assert_eq!(minimax(&b, Color::Black, depth, &rules).score, score);
    }
    assert_eq!(perft(&b, Color::Black, 2, &rules), 5);
    assert_eq!(perft(&b, Color::Black, 3, &rules), 13);
}

#[test]
fn narrow_rule_scores_stuck_side_statically() {
    let b = stuck();
    let rules = Rules::new(Directions::All, TerminalRule::SideToMove);
    let r = Searcher::new(rules).search_depth(&b, Color::Black, 3);
    assert_eq!((r.bestmove, r.score, r.nodes), (None, 19 - 35, 1));
}

#[test]
fn sixty_discs_is_terminal_for_both_rules() {
    // 60 discs, four empty corners that would still be playable
    let text = "\
        .WWWWWW.
        BBBBBBBB
        WWWWWWWW
        BBBBBBBB
        WWWWWWWW
        BBBBBBBB
        WWWWWWWW
        .BBBBBB.";
    let b = Board::from_text(text, Color::Black).unwrap();
    assert_eq!(b.total_discs(), FULL_BOARD_THRESHOLD);
    for terminal in [TerminalRule::SideToMove, TerminalRule::BothSides] {
        let rules = Rules::new(Directions::Orthogonal, terminal);
        assert!(rules.is_terminal(&b, Color::Black));
        assert!(rules.is_terminal(&b, Color::White));
    }
}
