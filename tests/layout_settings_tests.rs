//! Dual-board layout geometry and settings persistence.

use duotris::core::DuelLayout;
use duotris::settings::{JsonFileSettings, MemorySettings};

fn temp_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("duotris-{}-{}.json", name, std::process::id()));
    path
}

#[test]
fn default_layout_geometry() {
    let settings = MemorySettings::new();
    let layout = DuelLayout::new(10, 20, &settings);

    assert_eq!(layout.internal_spacing(), 4.0);
    assert_eq!(layout.board_origin(), (2.0, 1.0));
    assert_eq!(layout.board_offset(), 14.0);
    assert_eq!(layout.world_width(), 28.0);
    assert_eq!(layout.world_height(), 21.0);
}

#[test]
fn world_width_is_constant_across_spacing() {
    let mut settings = MemorySettings::new();
    let mut layout = DuelLayout::new(10, 20, &settings);
    let width = layout.world_width();

    for spacing in [0.0, 1.0, 2.5, 6.0, 8.0] {
        layout.set_internal_spacing(spacing, &mut settings);
        assert_eq!(layout.world_width(), width, "spacing {spacing}");
        // The two boards never overlap.
        assert!(layout.board_offset() >= 10.0);
    }
}

#[test]
fn spacing_survives_a_reload() {
    let path = temp_path("reload");
    let _ = std::fs::remove_file(&path);

    {
        let mut settings = JsonFileSettings::load(&path);
        let mut layout = DuelLayout::new(10, 20, &settings);
        layout.set_internal_spacing(6.0, &mut settings);
    }

    let settings = JsonFileSettings::load(&path);
    let layout = DuelLayout::new(10, 20, &settings);
    assert_eq!(layout.internal_spacing(), 6.0);
    assert_eq!(layout.board_origin().0, 1.0);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn resize_recomputes_world_dimensions() {
    let settings = MemorySettings::new();
    let mut layout = DuelLayout::new(10, 20, &settings);
    layout.resize(6, 12);

    assert_eq!(layout.board_offset(), 10.0);
    assert_eq!(layout.world_width(), 20.0);
    assert_eq!(layout.world_height(), 13.0);
}
