use egui::{Color32, pos2};
use image::Rgba;
use sketchpad::{BrushConfig, StrokeStore, SurfaceSize, render};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn size(width: u32, height: u32) -> SurfaceSize {
    SurfaceSize::new(width, height).expect("valid size")
}

#[test]
fn test_empty_drawing_is_white() {
    let image = render(&[], size(16, 8));
    assert_eq!(image.dimensions(), (16, 8));
    assert!(image.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_render_is_deterministic() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pos2(3.0, 4.0));
    store.extend_stroke(pos2(40.0, 17.5));
    store.extend_stroke(pos2(12.25, 50.0));
    store.set_brush_color(Color32::RED);
    store.set_brush_width(17.0);
    store.begin_stroke(pos2(60.0, 10.0));
    store.extend_stroke(pos2(5.0, 45.0));

    let first = render(store.strokes(), size(64, 64));
    let second = render(store.strokes(), size(64, 64));
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_scenario_e_single_point_renders_dot() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pos2(3.0, 3.0));

    let image = render(store.strokes(), size(20, 20));
    assert_eq!(*image.get_pixel(3, 3), BLACK);
    assert_eq!(*image.get_pixel(9, 3), WHITE);
    assert_eq!(*image.get_pixel(3, 9), WHITE);
}

#[test]
fn test_dot_diameter_matches_width() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pos2(20.0, 20.0));
    let width = store.strokes()[0].width();

    let image = render(store.strokes(), size(40, 40));
    let marked = (0..40).filter(|x| *image.get_pixel(*x, 20) != WHITE).count();
    assert_eq!(marked as f32, width);
}

#[test]
fn test_line_has_round_caps() {
    let mut store = StrokeStore::with_brush(BrushConfig::new(Color32::BLACK, 10.0));
    store.begin_stroke(pos2(10.0, 20.0));
    store.extend_stroke(pos2(30.0, 20.0));

    let image = render(store.strokes(), size(50, 40));
    // Along the line and past its end, within the cap.
    assert_eq!(*image.get_pixel(20, 20), BLACK);
    assert_eq!(*image.get_pixel(33, 20), BLACK);
    // The corner a square cap would fill stays empty.
    assert_eq!(*image.get_pixel(34, 24), WHITE);
    assert_eq!(*image.get_pixel(20, 30), WHITE);
}

#[test]
fn test_later_strokes_paint_over_earlier() {
    let mut store = StrokeStore::new();
    store.set_brush_color(Color32::RED);
    store.begin_stroke(pos2(10.0, 10.0));
    store.extend_stroke(pos2(30.0, 10.0));
    store.set_brush_color(Color32::BLUE);
    store.begin_stroke(pos2(20.0, 0.0));
    store.extend_stroke(pos2(20.0, 20.0));

    let image = render(store.strokes(), size(40, 20));
    assert_eq!(*image.get_pixel(20, 10), Rgba([0, 0, 255, 255]));
    assert_eq!(*image.get_pixel(12, 10), Rgba([255, 0, 0, 255]));
}

#[test]
fn test_sharp_turn_has_no_gap_at_joint() {
    let mut store = StrokeStore::with_brush(BrushConfig::new(Color32::BLACK, 12.0));
    store.begin_stroke(pos2(5.0, 30.0));
    store.extend_stroke(pos2(30.0, 30.0));
    store.extend_stroke(pos2(5.0, 31.0));

    let image = render(store.strokes(), size(40, 40));
    // Outside corner of the hairpin is covered by the round join.
    assert_eq!(*image.get_pixel(33, 30), BLACK);
}

#[test]
fn test_strokes_outside_surface_are_clipped() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pos2(-100.0, -100.0));
    store.extend_stroke(pos2(-50.0, 500.0));
    store.begin_stroke(pos2(8.0, 4.0));
    store.extend_stroke(pos2(400.0, 4.0));

    let image = render(store.strokes(), size(10, 10));
    assert_eq!(*image.get_pixel(0, 9), WHITE);
    assert_eq!(*image.get_pixel(9, 4), BLACK);
}

#[test]
fn test_zero_sized_surface() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pos2(1.0, 1.0));
    let image = render(store.strokes(), size(0, 0));
    assert_eq!(image.dimensions(), (0, 0));
}

#[test]
fn test_dot_at_fractional_position_stays_in_bounds() {
    for (width, x, surface_width) in [(20.954453, 139.47722, 300), (38.04738, 1003.9764, 1100)] {
        let mut store = StrokeStore::with_brush(BrushConfig::new(Color32::BLACK, width));
        store.begin_stroke(pos2(x, 50.0));

        let image = render(store.strokes(), size(surface_width, 100));
        assert_eq!(*image.get_pixel(x as u32, 50), BLACK);
    }
}

#[test]
fn test_widths_and_positions_sweep_without_panicking() {
    let mut width = 5.0f32;
    while width <= 50.0 {
        let mut x = 0.0f32;
        while x < 80.0 {
            let mut store = StrokeStore::with_brush(BrushConfig::new(Color32::BLACK, width));
            store.begin_stroke(pos2(x, 10.0 + x / 8.0));
            store.extend_stroke(pos2(x * 0.5 + 3.3, 19.7));

            let image = render(store.strokes(), size(90, 24));
            assert_eq!(image.dimensions(), (90, 24));
            x += 0.37;
        }
        width += 0.731;
    }
}

#[test]
fn test_segments_with_far_endpoints_still_render() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pos2(-1e9, 5.0));
    store.extend_stroke(pos2(1e9, 5.0));
    store.begin_stroke(pos2(-1e9, -1e9));
    store.extend_stroke(pos2(1e9, 1e9));

    let image = render(store.strokes(), size(40, 40));
    assert_eq!(*image.get_pixel(30, 5), BLACK);
    assert_eq!(*image.get_pixel(20, 20), BLACK);
    assert_eq!(*image.get_pixel(30, 20), WHITE);
}

#[test]
fn test_overflowing_coordinates_do_not_blank_the_stroke() {
    let mut store = StrokeStore::new();
    store.begin_stroke(pos2(-1e20, 5.0));
    store.extend_stroke(pos2(1e20, 5.0));

    let image = render(store.strokes(), size(10, 10));
    assert!(image.pixels().any(|p| *p != WHITE));
}
