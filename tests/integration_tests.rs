//! Integration tests - full sessions driven through the public API

use blockfall::core::{GameSession, GameSnapshot, ManualClock, Scripted, SessionConfig};
use blockfall::types::{Command, Coord, Direction, PieceKind};

fn scripted(kinds: &[PieceKind]) -> GameSession<Scripted> {
    GameSession::with_source(SessionConfig::default(), Scripted::new(kinds.to_vec()).unwrap())
        .unwrap()
}

#[test]
fn test_move_left_until_wall() {
    let mut game = scripted(&[PieceKind::O]);
    assert!(game.spawn_piece());
    assert_eq!(game.active().unwrap().anchor, Coord::new(5, 0));

    for expected_x in (0..5).rev() {
        assert!(game.handle_command(Command::MoveLeft));
        assert_eq!(game.active().unwrap().anchor.x, expected_x);
    }

    // Against the wall: rejected, nothing changes
    assert!(!game.handle_command(Command::MoveLeft));
    assert_eq!(game.active().unwrap().anchor, Coord::new(0, 0));
}

#[test]
fn test_translate_is_unit_shift_or_nothing() {
    for kind in PieceKind::ALL {
        for direction in Direction::ALL {
            let mut game = scripted(&[kind]);
            game.spawn_piece();
            for _ in 0..20 {
                let before = game.active().unwrap().cells();
                let moved = game.translate(direction);
                let after = game.active().unwrap();

                let expected = if moved {
                    before.map(|c| c.shifted(direction))
                } else {
                    before
                };
                assert_eq!(after.cells(), expected, "{kind:?} moving {direction:?}");
                assert!(after.fits(game.board()), "{kind:?} moving {direction:?}");
            }
        }
    }
}

#[test]
fn test_translate_up_is_rejected_at_spawn() {
    let mut game = scripted(&[PieceKind::T]);
    game.spawn_piece();
    assert!(!game.translate(Direction::Up));
    assert_eq!(game.active().unwrap().anchor, Coord::new(5, 0));
}

#[test]
fn test_freeze_then_spawn_on_next_tick() {
    let mut game = scripted(&[PieceKind::O, PieceKind::T]);
    let mut now = 0;

    let mut ticks = 0;
    loop {
        now += 500;
        assert!(game.tick_at(now));
        ticks += 1;
        if let Some(event) = game.take_last_event() {
            assert!(event.frozen);
            assert_eq!(event.rows_cleared, 0);
            break;
        }
        assert!(ticks < 100, "piece never froze");
    }

    // O falls from y=0 until its lower row sits on y=15
    assert_eq!(ticks, 14);
    assert!(game.active().is_none());
    assert!(game.board().is_occupied(Coord::new(5, 15)));
    assert!(game.board().is_occupied(Coord::new(6, 14)));

    now += 500;
    game.tick_at(now);
    let piece = game.active().unwrap();
    assert_eq!(piece.kind, PieceKind::T);
    assert_eq!(piece.anchor, Coord::new(5, 1));
    assert_eq!(game.pieces_spawned(), 2);
}

#[test]
fn test_soft_drop_clears_row() {
    // Five O pieces side by side fill rows 14 and 15
    let mut game = scripted(&[PieceKind::O]);
    for target_x in [0, 2, 4, 6, 8] {
        assert!(game.spawn_piece());
        while game.active().unwrap().anchor.x > target_x {
            game.handle_command(Command::MoveLeft);
        }
        while game.active().unwrap().anchor.x < target_x {
            game.handle_command(Command::MoveRight);
        }
        while game.active().is_some() {
            game.handle_command(Command::SoftDrop);
        }
    }

    assert_eq!(game.score(), 200);
    assert_eq!(game.rows_cleared(), 2);
    assert!(game.board().is_empty());
}

#[test]
fn test_ticks_follow_manual_clock() {
    let mut game = scripted(&[PieceKind::Line]);
    let clock = ManualClock::new(0);

    assert!(!game.on_frame(&clock));
    clock.advance(499);
    assert!(!game.on_frame(&clock));
    clock.advance(1);
    assert!(game.on_frame(&clock));
    assert_eq!(game.last_tick_ms(), 500);
    assert!(game.active().is_some());
}

#[test]
fn test_restart_clears_everything() {
    let mut game = scripted(&[PieceKind::O]);
    game.spawn_piece();
    while game.active().is_some() {
        game.handle_command(Command::SoftDrop);
    }
    assert!(!game.board().is_empty());

    game.restart();
    assert!(game.board().is_empty());
    assert!(game.active().is_none());
    assert_eq!(game.score(), 0);
    assert_eq!(game.pieces_spawned(), 0);
}

#[test]
fn test_snapshot_json_roundtrip() {
    let mut game = scripted(&[PieceKind::S, PieceKind::J]);
    game.spawn_piece();
    game.handle_command(Command::Rotate);

    let snap = game.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
    assert_eq!(back.next, Some(PieceKind::J));
    assert_eq!(back.active.unwrap().rotation, 1);
}
