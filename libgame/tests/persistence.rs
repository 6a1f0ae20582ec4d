use std::fs;

use libgame::{
    Game,
    board::GameBoard,
    intent::Intent,
    save::{self, SaveError},
    scheduler::StepScheduler,
};

fn glider_game() -> Game {
    let mut game = Game::new(GameBoard::new(8, 6, 10), StepScheduler::new(15));
    for pos in [[1, 0], [2, 1], [0, 2], [1, 2], [2, 2]] {
        let index = game.board.index_of(pos).unwrap();
        game.board.toggle_cell_at(index);
    }
    game
}

#[test]
fn save_then_load_restores_alive_flags() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("glider.life");

    let mut game = glider_game();
    let saved_flags = game.board.serialize_alive_flags();
    game.apply(Intent::Save(path.clone())).unwrap();

    game.apply(Intent::Reset).unwrap();
    assert_eq!(game.board.alive_count(), 0);

    game.apply(Intent::Load(path)).unwrap();
    assert_eq!(game.board.serialize_alive_flags(), saved_flags);
    assert_eq!(game.board.step_count(), 0);
}

#[test]
fn saved_document_is_an_indented_bool_array() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("board.life");

    let game = glider_game();
    save::save(&game.board, &path).unwrap();

    let document = fs::read_to_string(&path).unwrap();
    assert!(document.starts_with("[\n    false,\n    true,"));

    let flags: Vec<bool> = serde_json::from_str(&document).unwrap();
    assert_eq!(flags.len(), 48);
    assert_eq!(flags.iter().filter(|alive| **alive).count(), 5);
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut game = glider_game();
    let before = game.clone();

    let err = game.load(tmp.path().join("missing.life")).unwrap_err();
    assert!(matches!(err, SaveError::Io { .. }));
    assert_eq!(game, before);
}

#[test]
fn loading_malformed_content_is_a_parse_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("broken.life");
    fs::write(&path, "[true, false, maybe]").unwrap();

    let mut game = glider_game();
    let before = game.clone();

    let err = game.apply(Intent::Load(path)).unwrap_err();
    assert!(matches!(err, SaveError::Parse(_)));
    assert_eq!(game, before);
}

#[test]
fn loading_a_board_of_another_size_is_a_validation_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("small.life");
    save::save(&GameBoard::new(3, 3, 10), &path).unwrap();

    let mut game = glider_game();
    let before = game.clone();

    let err = game.load(&path).unwrap_err();
    assert!(matches!(
        err,
        SaveError::Validation {
            expected: 48,
            found: 9
        }
    ));
    assert_eq!(game, before);
}

#[test]
fn saving_into_a_missing_directory_is_an_io_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("no").join("such").join("dir.life");

    let game = glider_game();
    let err = game.save(&path).unwrap_err();
    assert!(matches!(err, SaveError::Io { .. }));
}
