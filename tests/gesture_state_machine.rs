use eframe_whiteboard::{Board, GestureState, Shape, ShapeKind, Tool};
use egui::{Color32, Pos2};
use std::collections::HashSet;

const DRAWING_TOOLS: [Tool; 4] = [Tool::Rectangle, Tool::Circle, Tool::Arrow, Tool::Scribble];

fn counts(board: &Board) -> [usize; 4] {
    [
        board.rectangles().len(),
        board.circles().len(),
        board.arrows().len(),
        board.scribbles().len(),
    ]
}

fn collect_ids(board: &Board) -> Vec<eframe_whiteboard::ShapeId> {
    board.shapes().map(|s| s.id()).collect()
}

#[test]
fn test_begin_appends_one_shape_with_fresh_id() {
    let mut board = Board::default();

    for round in 0..3 {
        for tool in DRAWING_TOOLS {
            board.set_tool(tool);
            let before = counts(&board);
            let existing: HashSet<_> = collect_ids(&board).into_iter().collect();

            let created = board
                .begin_gesture(Pos2::new(round as f32 * 10.0, 5.0))
                .expect("drawing tools create a shape");
            board.end_gesture();

            assert_eq!(Some(created.kind), tool.shape_kind());
            assert!(!existing.contains(&created.id));

            let after = counts(&board);
            let grown: Vec<_> = (0..4).filter(|&i| after[i] != before[i]).collect();
            assert_eq!(grown.len(), 1, "{} touched more than one collection", tool.name());
            assert_eq!(after[grown[0]], before[grown[0]] + 1);
        }
    }

    let ids = collect_ids(&board);
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(ids.len(), 12);
    assert_eq!(unique.len(), 12);
}

#[test]
fn test_select_tool_never_creates_shapes() {
    let mut board = Board::default();
    assert_eq!(board.tool(), Tool::Select);

    assert!(board.begin_gesture(Pos2::new(1.0, 2.0)).is_none());
    assert!(!board.update_gesture(Pos2::new(8.0, 9.0)));
    board.end_gesture();

    assert!(board.is_empty());
    assert_eq!(board.gesture(), GestureState::Idle);
}

#[test]
fn test_initial_geometry_per_tool() {
    let mut board = Board::default();
    let at = Pos2::new(7.0, 3.0);
    for tool in DRAWING_TOOLS {
        board.set_tool(tool);
        board.begin_gesture(at);
        board.end_gesture();
    }

    let rect = &board.rectangles()[0];
    assert_eq!((rect.origin, rect.width, rect.height), (at, 20.0, 20.0));
    let circle = &board.circles()[0];
    assert_eq!((circle.center, circle.radius), (at, 20.0));
    assert_eq!(board.arrows()[0].points, [at, Pos2::new(27.0, 23.0)]);
    assert_eq!(board.scribbles()[0].points(), &[at]);
}

#[test]
fn test_rectangle_size_is_measured_from_origin() {
    let mut board = Board::default();
    board.set_tool(Tool::Rectangle);
    board.begin_gesture(Pos2::new(10.0, 10.0));
    board.update_gesture(Pos2::new(90.0, 15.0));
    board.update_gesture(Pos2::new(30.0, 50.0));

    let rect = &board.rectangles()[0];
    assert_eq!(rect.width, 20.0);
    assert_eq!(rect.height, 40.0);
    assert_eq!(rect.origin, Pos2::new(10.0, 10.0));
}

#[test]
fn test_circle_radius_follows_pointer() {
    let mut board = Board::default();
    board.set_tool(Tool::Circle);
    board.begin_gesture(Pos2::new(0.0, 0.0));
    board.update_gesture(Pos2::new(3.0, 4.0));

    assert_eq!(board.circles()[0].radius, 5.0);
}

#[test]
fn test_arrow_keeps_start_and_tracks_end() {
    let mut board = Board::default();
    board.set_tool(Tool::Arrow);
    board.begin_gesture(Pos2::new(4.0, 4.0));
    board.update_gesture(Pos2::new(10.0, 0.0));
    board.update_gesture(Pos2::new(-5.0, 12.0));

    assert_eq!(board.arrows()[0].points, [Pos2::new(4.0, 4.0), Pos2::new(-5.0, 12.0)]);
}

#[test]
fn test_scribble_accumulates_points_in_order() {
    let mut board = Board::default();
    board.set_tool(Tool::Scribble);
    board.begin_gesture(Pos2::new(0.0, 0.0));
    board.update_gesture(Pos2::new(1.0, 1.0));
    board.update_gesture(Pos2::new(2.0, 2.0));

    let points = board.scribbles()[0].points();
    assert_eq!(points.len(), 3);
    assert_eq!(points, &[Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]);
}

#[test]
fn test_update_without_gesture_changes_nothing() {
    let mut board = Board::default();
    board.set_tool(Tool::Scribble);
    board.begin_gesture(Pos2::ZERO);
    board.end_gesture();
    let snapshot = board.clone();

    for tool in DRAWING_TOOLS {
        board.set_tool(tool);
        assert!(!board.update_gesture(Pos2::new(50.0, 50.0)));
    }

    assert_eq!(board.scribbles(), snapshot.scribbles());
    assert_eq!(counts(&board), counts(&snapshot));
}

#[test]
fn test_end_gesture_always_returns_to_idle() {
    let mut board = Board::default();
    board.end_gesture();
    assert!(board.gesture().is_idle());

    board.set_tool(Tool::Circle);
    let target = board.begin_gesture(Pos2::ZERO).unwrap();
    assert_eq!(board.gesture().target(), Some(target));
    assert_eq!(board.end_gesture(), Some(target));
    assert!(board.gesture().is_idle());

    assert!(!board.update_gesture(Pos2::new(30.0, 40.0)));
    assert_eq!(board.circles()[0].radius, 20.0);
}

#[test]
fn test_fill_change_only_affects_new_shapes() {
    let mut board = Board::default();
    board.set_tool(Tool::Rectangle);
    let a = board.begin_gesture(Pos2::new(0.0, 0.0)).unwrap();
    board.end_gesture();
    board.set_tool(Tool::Circle);
    let b = board.begin_gesture(Pos2::new(50.0, 50.0)).unwrap();
    board.end_gesture();

    board.set_fill_color(Color32::from_rgb(0, 128, 255));

    board.set_tool(Tool::Arrow);
    let c = board.begin_gesture(Pos2::new(90.0, 90.0)).unwrap();
    board.end_gesture();

    assert_eq!(board.shape(a).unwrap().fill(), Color32::from_rgb(255, 0, 0));
    assert_eq!(board.shape(b).unwrap().fill(), Color32::from_rgb(255, 0, 0));
    assert_eq!(board.shape(c).unwrap().fill(), Color32::from_rgb(0, 128, 255));
}

#[test]
fn test_gesture_leaves_other_collections_untouched() {
    let mut board = Board::default();
    for tool in DRAWING_TOOLS {
        board.set_tool(tool);
        board.begin_gesture(Pos2::new(5.0, 5.0));
        board.update_gesture(Pos2::new(15.0, 25.0));
        board.end_gesture();
    }
    let before = board.clone();

    board.set_tool(Tool::Rectangle);
    board.begin_gesture(Pos2::new(100.0, 100.0));
    board.update_gesture(Pos2::new(140.0, 160.0));
    board.end_gesture();

    assert_eq!(board.circles(), before.circles());
    assert_eq!(board.arrows(), before.arrows());
    assert_eq!(board.scribbles(), before.scribbles());
    assert_eq!(&board.rectangles()[..1], before.rectangles());
    assert_eq!(board.rectangles().len(), 2);
}

#[test]
fn test_only_active_shape_is_updated() {
    let mut board = Board::default();
    board.set_tool(Tool::Circle);
    board.begin_gesture(Pos2::ZERO);
    board.update_gesture(Pos2::new(6.0, 8.0));
    board.end_gesture();
    board.begin_gesture(Pos2::new(100.0, 100.0));
    board.update_gesture(Pos2::new(103.0, 104.0));

    let radii: Vec<f32> = board.circles().iter().map(|c| c.radius).collect();
    assert_eq!(radii, vec![10.0, 5.0]);
    assert_eq!(board.circles()[0].center, Pos2::ZERO);
    assert_eq!(board.gesture().target().map(|t| t.kind), Some(ShapeKind::Circle));
}
