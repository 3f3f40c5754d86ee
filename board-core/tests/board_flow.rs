use board_core::{
    BoardConfig, BoardController, DEFAULT_CATALOG, DragSession, PlacedPiece, Point,
    ReleasePolicy, Settled, snap,
};

fn palette_index(name: &str) -> usize {
    DEFAULT_CATALOG
        .iter()
        .position(|a| a.name == name)
        .unwrap()
}

fn place(board: &mut BoardController, name: &str, at: (f64, f64)) -> PlacedPiece {
    board.start_palette_drag(palette_index(name)).1.unwrap();
    match board.drop_on_board(Point::from(at)) {
        Settled::Placed(p) => p,
        other => panic!("expected placement, got {other:?}"),
    }
}

#[test]
fn pink_swatch_dropped_at_23_47_lands_on_20_40() {
    let mut board = BoardController::default();
    let before = board.pieces().len();
    let placed = place(&mut board, "Pink", (23.0, 47.0));
    let expected = PlacedPiece {
        x: 20,
        y: 40,
        size: 5,
        color: "#FFC0CB".to_string(),
    };
    assert_eq!(placed, expected);
    assert_eq!(board.pieces().len(), before + 1);
    assert_eq!(board.pieces().last(), Some(&expected));
    assert!(board.session().is_none());
}

#[test]
fn drop_position_matches_floor_snap_for_negative_pointer() {
    let mut board = BoardController::default();
    let placed = place(&mut board, "Green", (-3.0, -17.5));
    assert_eq!((placed.x, placed.y), (snap(-3.0, 10), snap(-17.5, 10)));
    assert_eq!((placed.x, placed.y), (-10, -20));
}

#[test]
fn pick_up_and_release_in_place_reproduces_piece() {
    let mut board = BoardController::default();
    place(&mut board, "Brown", (40.0, 40.0));
    let original = place(&mut board, "Yellow", (200.0, 100.0));
    place(&mut board, "Orange", (400.0, 10.0));

    let at = Point::from((f64::from(original.x), f64::from(original.y)));
    assert_eq!(board.pointer_down(at), (Settled::Idle, Some(1)));
    assert_eq!(board.pieces().len(), 2);
    board.pointer_move(at);
    assert_eq!(board.pointer_up(), Settled::Placed(original.clone()));

    assert_eq!(board.pieces().len(), 3);
    assert_eq!(board.pieces().last(), Some(&original));
}

#[test]
fn relocating_preserves_grab_point_within_piece() {
    let mut board = BoardController::default();
    place(&mut board, "MidBlue", (100.0, 100.0));
    board.pointer_down(Point::from((133.0, 121.0)));
    board.pointer_move(Point::from((180.0, 300.0)));
    board.pointer_move(Point::from((233.0, 321.0)));
    match board.pointer_up() {
        Settled::Placed(p) => assert_eq!((p.x, p.y), (200, 300)),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn dropping_board_piece_on_palette_deletes_it() {
    let mut board = BoardController::default();
    place(&mut board, "DarkBlue", (0.0, 0.0));
    let doomed = place(&mut board, "LightBlue", (100.0, 0.0));
    assert_eq!(board.pieces().len(), 2);

    board.pointer_down(Point::from((150.0, 50.0)));
    assert_eq!(board.drop_on_palette(), Settled::Deleted(doomed));
    assert_eq!(board.pieces().len(), 1);
    assert_eq!(board.pieces()[0].color, "#00008B");
    assert!(board.session().is_none());

    // the same release must not resurrect it
    assert_eq!(board.pointer_up(), Settled::Idle);
    assert_eq!(board.pieces().len(), 1);
}

#[test]
fn overlap_picks_the_later_piece() {
    let mut board = BoardController::default();
    place(&mut board, "LightBlue", (0.0, 0.0));
    place(&mut board, "Green", (30.0, 30.0));

    assert_eq!(board.pointer_down(Point::from((35.0, 35.0))).1, Some(1));
    match board.session() {
        Some(DragSession::FromBoard {
            piece, source_index, ..
        }) => {
            assert_eq!(piece.color, "#008000");
            assert_eq!(*source_index, 1);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(board.pieces().len(), 1);
    assert_eq!(board.pieces()[0].color, "#ADD8E6");
}

#[test]
fn palette_drop_without_session_changes_nothing() {
    let mut board = BoardController::default();
    place(&mut board, "Pink", (10.0, 10.0));
    let before = board.pieces().to_vec();
    let rev = board.revision();
    assert_eq!(board.drop_on_palette(), Settled::Idle);
    assert_eq!(board.pieces(), before.as_slice());
    assert_eq!(board.revision(), rev);
}

#[test]
fn board_drop_without_session_changes_nothing() {
    let mut board = BoardController::default();
    assert_eq!(board.drop_on_board(Point::from((10.0, 10.0))), Settled::Idle);
    assert!(board.pieces().is_empty());
}

#[test]
fn palette_drag_abandoned_off_board_is_cancelled() {
    let mut board = BoardController::default();
    board.start_palette_drag(0).1.unwrap();
    assert_eq!(board.release_elsewhere(), Settled::Cancelled);
    assert!(board.session().is_none());
    assert!(board.pieces().is_empty());
}

#[test]
fn off_board_release_follows_policy() {
    for (policy, expect_kept) in [(ReleasePolicy::Restore, true), (ReleasePolicy::Discard, false)] {
        let mut board = BoardController::new(BoardConfig {
            release_policy: policy,
            ..BoardConfig::default()
        });
        place(&mut board, "Orange", (50.0, 50.0));
        board.pointer_down(Point::from((55.0, 55.0)));
        board.pointer_move(Point::from((-400.0, 55.0)));
        let settled = board.release_elsewhere();
        assert_eq!(board.pieces().len(), usize::from(expect_kept), "{policy:?}");
        if expect_kept {
            assert!(matches!(settled, Settled::Restored(ref p) if p.x == -410 && p.y == 50));
        } else {
            assert!(matches!(settled, Settled::Lost(_)));
        }
    }
}

#[test]
fn custom_unit_scales_snapping_and_hit_area() {
    let mut board = BoardController::new(BoardConfig {
        unit: 25,
        ..BoardConfig::default()
    });
    let placed = place(&mut board, "Green", (60.0, 99.0));
    assert_eq!((placed.x, placed.y), (50, 75));
    // green is 2 units wide: 50..100
    assert_eq!(board.pointer_down(Point::from((99.0, 124.0))).1, Some(0));
}
