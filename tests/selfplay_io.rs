use discbot::selfplay::{generate_games, read_jsonl, write_jsonl, SelfPlayParams};
use std::fs::create_dir_all;

#[test]
fn write_and_read_jsonl() {
    let params = SelfPlayParams { games: 3, black_depth: 1, white_depth: 1, random_plies: 2, seed: 123, ..SelfPlayParams::default() };
    let games = generate_games(&params).unwrap();
    let outdir = std::path::Path::new("target/selfplay_test");
    create_dir_all(outdir).unwrap();
    let path = outdir.join("games.jsonl");
    write_jsonl(&games, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
    let back = read_jsonl(&path).unwrap();
    assert_eq!(back, games);
}

#[test]
fn read_missing_file_is_io_error() {
    let err = read_jsonl("target/selfplay_test/does_not_exist.jsonl").unwrap_err();
    assert!(matches!(err, discbot::Error::Io { .. }));
}

#[test]
fn off_board_move_in_jsonl_is_rejected() {
    let params = SelfPlayParams { games: 1, black_depth: 1, white_depth: 1, random_plies: 2, seed: 5, ..SelfPlayParams::default() };
    let games = generate_games(&params).unwrap();
    let mut value = serde_json::to_value(&games[0]).unwrap();
    value["opening"][0] = serde_json::json!({ "row": 9, "col": 9 });

    let outdir = std::path::Path::new("target/selfplay_test");
    create_dir_all(outdir).unwrap();
    let path = outdir.join("off_board.jsonl");
    std::fs::write(&path, format!("{value}\n")).unwrap();

    let err = read_jsonl(&path).unwrap_err();
    assert!(matches!(err, discbot::Error::Serialization(_)), "{err}");
    assert!(err.to_string().contains("(9, 9) is out of bounds"), "{err}");
}
