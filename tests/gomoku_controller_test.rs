//! Tests for turn sequencing, clearing and the random opponent.

use strictly_gomoku::{
    BoardSize, GameController, Mark, MoveError, Outcome, Phase, Position, RandomOpponent,
    ScriptedOpponent, Side, Turn,
};

const X_CELLS: [(usize, usize); 8] = [
    (0, 0),
    (0, 1),
    (1, 2),
    (1, 3),
    (2, 0),
    (2, 1),
    (3, 2),
    (3, 3),
];

const O_CELLS: [(usize, usize); 8] = [
    (0, 2),
    (0, 3),
    (1, 0),
    (1, 1),
    (2, 2),
    (2, 3),
    (3, 0),
    (3, 1),
];

fn pos((row, col): (usize, usize)) -> Position {
    Position::new(row, col)
}

fn scripted(n: u8, script: &[(usize, usize)]) -> GameController {
    let opponent = ScriptedOpponent::new(script.iter().copied().map(pos));
    GameController::new(BoardSize::new(n).unwrap(), Box::new(opponent))
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let mut game = scripted(4, &O_CELLS);
    let mut last = Turn::HumanToMove;
    for cell in X_CELLS {
        match game.play_human(pos(cell)).unwrap() {
            Turn::ComputerToMove(ticket) => last = game.play_computer(ticket).unwrap(),
            other => panic!("unexpected turn {other:?}"),
        }
    }
    assert_eq!(last, Turn::Finished(Outcome::Draw));
    assert_eq!(game.phase(), Phase::GameOver(Outcome::Draw));
    assert_eq!(game.status().to_string(), "draw");
    assert!(game.board().is_full());
}

#[test]
fn test_draw_when_human_fills_last_cell() {
    let mut game = scripted(4, &O_CELLS);
    let opening = game.clear().expect("computer opens after clear");
    assert_eq!(game.first_mover(), Side::Computer);
    assert_eq!(game.play_computer(opening), Ok(Turn::HumanToMove));

    let mut last = Turn::HumanToMove;
    for cell in X_CELLS {
        last = game.play_human(pos(cell)).unwrap();
        if let Turn::ComputerToMove(ticket) = last {
            game.play_computer(ticket).unwrap();
        }
    }
    assert_eq!(last, Turn::Finished(Outcome::Draw));
}

#[test]
fn test_no_moves_after_game_over_until_clear() {
    let mut game = scripted(5, &[(4, 0), (4, 1), (4, 2)]);
    for col in 0..3 {
        if let Turn::ComputerToMove(ticket) = game.play_human(Position::new(1, col)).unwrap() {
            game.play_computer(ticket).unwrap();
        }
    }
    assert_eq!(
        game.play_human(Position::new(1, 3)),
        Ok(Turn::Finished(Outcome::Winner(Side::Human)))
    );
    assert_eq!(game.play_human(Position::new(0, 0)), Err(MoveError::GameOver));

    assert!(game.clear().is_some());
    assert!(!game.is_over());
}

#[test]
fn test_reset_while_computer_pending_discards_old_move() {
    let mut game = scripted(5, &[(3, 3), (0, 4)]);
    let stale = match game.play_human(Position::new(0, 0)).unwrap() {
        Turn::ComputerToMove(ticket) => ticket,
        other => panic!("unexpected turn {other:?}"),
    };
    let opening = game.clear().unwrap();

    assert_eq!(game.play_computer(stale), Err(MoveError::StaleTicket));
    assert_eq!(game.board().empty_cells().len(), 25);

    game.play_computer(opening).unwrap();
    assert_eq!(game.board().empty_cells().len(), 24);
    assert_eq!(game.last_move().map(|m| m.mark), Some(Mark::O));
}

#[test]
fn test_random_games_only_use_empty_cells_and_terminate() {
    for seed in 0..25 {
        let mut game = GameController::new(
            BoardSize::DEFAULT,
            Box::new(RandomOpponent::seeded(seed)),
        );
        let mut moves = 0;

        loop {
            let human = game.board().empty_cells()[0];
            let before = game.board().empty_cells();
            let turn = game.play_human(human).unwrap();
            moves += 1;
            assert_eq!(game.board().empty_cells().len(), before.len() - 1);

            let Turn::ComputerToMove(ticket) = turn else {
                break;
            };

            let before = game.board().empty_cells();
            let turn = game.play_computer(ticket).unwrap();
            moves += 1;
            let chosen = game.last_move().expect("computer moved").position;
            assert!(before.contains(&chosen), "seed {seed}: computer reused {chosen}");
            assert_eq!(game.board().empty_cells().len(), before.len() - 1);

            if let Turn::Finished(_) = turn {
                break;
            }
        }

        assert!(game.is_over(), "seed {seed} did not finish");
        assert!(moves <= 25);
    }
}

#[test]
fn test_seeded_games_replay_identically() {
    let play = |seed| {
        let mut game = GameController::new(
            BoardSize::new(6).unwrap(),
            Box::new(RandomOpponent::seeded(seed)),
        );
        let mut history = Vec::new();
        for col in 0..3 {
            if let Ok(Turn::ComputerToMove(ticket)) = game.play_human(Position::new(5, col * 2)) {
                game.play_computer(ticket).unwrap();
                history.push(game.last_move());
            }
        }
        history
    };
    assert_eq!(play(99), play(99));
}
