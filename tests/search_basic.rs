use discbot::board::{Board, Color, Move};
use discbot::rules::{Directions, Rules, TerminalRule};
use discbot::search::eval::utility;
use discbot::search::{choose_move, SearchParams, Searcher};

#[test]
fn utility_is_disc_difference_for_root() {
    let mut b = Board::new();
    Rules::default().apply(&mut b, Color::Black, 2, 3).unwrap();
    assert_eq!(utility(&b, Color::Black), 3);
    assert_eq!(utility(&b, Color::White), -3);
}

#[test]
fn search_returns_legal_move_startpos() {
    let b = Board::new();
    let mut searcher = Searcher::default();
    let res = searcher.search_depth(&b, Color::Black, 1);
    let bm = res.bestmove.expect("no move found at depth 1");
    assert!(Rules::default().legal_moves(&b, Color::Black).contains(&bm));
}

#[test]
fn opening_ties_break_to_first_row_major_move() {
    // All four openings are symmetric, so every depth picks (2,3).
    let b = Board::new();
    for depth in 1..=5 {
        assert_eq!(choose_move(&b, Color::Black, depth), Some(Move::new(2, 3).unwrap()), "depth {depth}");
    }
}

#[test]
fn startpos_scores_by_depth() {
    let b = Board::new();
    let expected = [(0, 0, 1), (1, 3, 5), (2, 0, 10), (3, 3, 21), (4, 0, 34), (5, 3, 70)];
    for (depth, score, nodes) in expected {
        let mut s = Searcher::default();
        let r = s.search_depth(&b, Color::Black, depth);
        assert_eq!(r.score, score, "depth {depth}");
        assert_eq!(r.nodes, nodes, "depth {depth}");
    }
}

#[test]
fn white_depth_one_reply_after_black_opening() {
    let rules = Rules::default();
    let mut b = Board::new();
    rules.apply(&mut b, Color::Black, 2, 3).unwrap();

    let mut s = Searcher::default();
    let r = s.search_depth(&b, Color::White, 1);
    let bm = r.bestmove.expect("white has replies");
    assert!(rules.legal_moves(&b, Color::White).contains(&bm));

    // Both replies give White -> Black = 0 one ply ahead; (2,4) comes first.
    let best_one_ply = rules
        .legal_moves(&b, Color::White)
        .into_iter()
        .map(|m| {
            let mut child = b.clone();
            rules.apply_move(&mut child, Color::White, m);
            utility(&child, Color::White)
        })
        .max()
        .unwrap();
    assert_eq!(r.score, best_one_ply);
    assert_eq!(bm, Move::new(2, 4).unwrap());
}

#[test]
fn search_does_not_mutate_input_board() {
    let b = Board::new();
    let snapshot = b.clone();
    let mut s = Searcher::default();
    let p = SearchParams { depth: 4, rules: Rules::default() };
    s.search_with_params(&b, Color::Black, p);
    assert_eq!(b, snapshot);
}

#[test]
fn depth_zero_has_no_move() {
    let b = Board::new();
    assert_eq!(choose_move(&b, Color::White, 0), None);
}

#[test]
fn params_rules_do_not_stick_to_the_searcher() {
    let b = Board::new();
    let all = Rules::new(Directions::All, TerminalRule::SideToMove);
    let mut s = Searcher::new(Rules::default());

    let with_params = s.search_with_params(&b, Color::Black, SearchParams { depth: 4, rules: all });
    assert_eq!(with_params, Searcher::new(all).search_depth(&b, Color::Black, 4));
    assert_eq!(*s.rules(), Rules::default());

    let after = s.search_depth(&b, Color::Black, 2);
    assert_eq!(after, Searcher::default().search_depth(&b, Color::Black, 2));
    assert_eq!((after.score, after.nodes), (0, 10));
}
