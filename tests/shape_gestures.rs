use egui::{Color32, ColorImage, PointerButton};
use pixel_paint::{Shape, Tool, ToolEngine};

fn engine(width: u32, height: u32) -> ToolEngine {
    ToolEngine::new(width, height, Color32::WHITE, 0).unwrap()
}

fn pixel(engine: &ToolEngine, x: u32, y: u32) -> Color32 {
    engine.surface().pixel(x, y).unwrap()
}

fn all_white(engine: &ToolEngine) -> bool {
    engine.surface().pixels().iter().all(|c| *c == Color32::WHITE)
}

#[test]
fn line_needs_two_clicks() {
    let mut engine = engine(10, 10);
    engine.set_active_tool(Tool::Line);

    engine.pointer_pressed(0, 0, PointerButton::Primary, &mut ());
    // First click only anchors; nothing is drawn yet.
    assert!(all_white(&engine));
    assert!(engine.preview().is_some());

    engine.pointer_pressed(5, 0, PointerButton::Primary, &mut ());
    for x in 0..=5 {
        assert_eq!(pixel(&engine, x, 0), Color32::BLACK, "missing line pixel at x={x}");
    }
    assert_eq!(pixel(&engine, 6, 0), Color32::WHITE);
    assert_eq!(pixel(&engine, 0, 1), Color32::WHITE);
    // No preview remains after the commit.
    assert!(engine.preview().is_none());
}

#[test]
fn line_preview_follows_the_cursor_without_touching_the_surface() {
    let mut engine = engine(10, 10);
    engine.set_active_tool(Tool::Line);
    engine.pointer_pressed(2, 2, PointerButton::Primary, &mut ());
    engine.pointer_released();
    engine.pointer_moved(7, 2);

    let mut frame = ColorImage::default();
    engine.render(&mut frame);

    // The tentative line shows up in the rendered frame...
    for x in 2..=7 {
        assert_eq!(frame.pixels[2 * 10 + x], Color32::BLACK, "preview missing at x={x}");
    }
    // ...but the committed surface is untouched.
    assert!(all_white(&engine));
}

#[test]
fn circle_commits_an_outline_of_the_clicked_radius() {
    let mut engine = engine(12, 12);
    engine.set_active_tool(Tool::Circle);

    engine.pointer_pressed(5, 5, PointerButton::Primary, &mut ());
    assert!(all_white(&engine));

    engine.pointer_pressed(5, 8, PointerButton::Primary, &mut ());

    // Radius 3 ring around the center.
    for (x, y) in [(5, 2), (5, 8), (2, 5), (8, 5)] {
        assert_eq!(pixel(&engine, x, y), Color32::BLACK, "ring missing at ({x}, {y})");
    }
    assert_eq!(pixel(&engine, 5, 5), Color32::WHITE);
    assert!(engine.preview().is_none());
}

#[test]
fn circle_preview_radius_tracks_the_cursor() {
    let mut engine = engine(12, 12);
    engine.set_active_tool(Tool::Circle);
    engine.pointer_pressed(5, 5, PointerButton::Primary, &mut ());
    engine.pointer_released();
    engine.pointer_moved(9, 5);

    match engine.preview().map(|overlay| overlay.shape) {
        Some(Shape::CircleOutline { radius, .. }) => assert_eq!(radius, 4.0),
        other => panic!("unexpected preview: {other:?}"),
    }
}

#[test]
fn switching_tools_discards_a_pending_gesture() {
    let mut engine = engine(12, 12);
    engine.set_active_tool(Tool::Line);
    engine.pointer_pressed(2, 2, PointerButton::Primary, &mut ());

    engine.set_active_tool(Tool::Circle);
    assert!(engine.preview().is_none());
    assert!(all_white(&engine));

    // The next click starts a fresh circle gesture, not a commit.
    engine.pointer_pressed(8, 8, PointerButton::Primary, &mut ());
    assert!(all_white(&engine));

    engine.pointer_pressed(8, 8, PointerButton::Primary, &mut ());
    // A zero-radius circle marks only its center; nothing from the
    // abandoned line shows up.
    assert_eq!(pixel(&engine, 8, 8), Color32::BLACK);
    assert_eq!(pixel(&engine, 2, 2), Color32::WHITE);
}

#[test]
fn new_image_aborts_a_pending_gesture() {
    let mut engine = engine(10, 10);
    engine.set_active_tool(Tool::Line);
    engine.pointer_pressed(1, 1, PointerButton::Primary, &mut ());

    engine.new_blank_image(10, 10, Color32::WHITE).unwrap();
    assert!(engine.preview().is_none());

    // First click after the reset anchors again instead of committing.
    engine.pointer_pressed(4, 4, PointerButton::Primary, &mut ());
    assert!(all_white(&engine));

    engine.pointer_pressed(4, 4, PointerButton::Primary, &mut ());
    assert_eq!(pixel(&engine, 4, 4), Color32::BLACK);
    assert_eq!(pixel(&engine, 1, 1), Color32::WHITE);
}

#[test]
fn preview_recolors_when_the_foreground_changes() {
    let mut engine = engine(10, 10);
    engine.set_active_tool(Tool::Line);
    engine.set_foreground(Color32::RED);
    engine.pointer_pressed(1, 1, PointerButton::Primary, &mut ());

    assert_eq!(engine.preview().unwrap().color, Color32::RED);
    engine.set_foreground(Color32::BLUE);
    assert_eq!(engine.preview().unwrap().color, Color32::BLUE);
}

#[test]
fn thick_line_covers_the_requested_width() {
    let mut engine = engine(12, 12);
    engine.set_active_tool(Tool::Line);
    engine.set_tool_size(2).unwrap(); // effective width 3

    engine.pointer_pressed(2, 5, PointerButton::Primary, &mut ());
    engine.pointer_pressed(9, 5, PointerButton::Primary, &mut ());

    for x in 2..=9 {
        for y in 4..=6 {
            assert_eq!(pixel(&engine, x, y), Color32::BLACK, "missing at ({x}, {y})");
        }
    }
    assert_eq!(pixel(&engine, 5, 3), Color32::WHITE);
    assert_eq!(pixel(&engine, 5, 7), Color32::WHITE);
}
