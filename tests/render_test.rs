use temperance_icon::icon_gen::{generate_icon, render, Args};
use temperance_icon::layout::Layout;
use temperance_icon::palette::{Color, DEFAULT_PALETTE};
use temperance_icon::ppm::header;
use tempfile::TempDir;

#[test_log::test]
fn test_render_small_icon() {
    let pixels = render(DEFAULT_PALETTE, 0.9, 4);

    // 4x4 RGB
    assert_eq!(pixels.len(), 48);

    // Top-left is the untouched gradient start, not the gradient end.
    let top_left = Color::rgb(pixels[0], pixels[1], pixels[2]);
    assert_ne!(top_left, DEFAULT_PALETTE.background_end);
}

#[test_log::test]
fn test_generate_icon_file_length() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for size in [2u32, 9, 10, 100] {
        let path = temp_dir.path().join(format!("icon-{}.ppm", size));
        let args = Args {
            size,
            ..Args::new(path.clone())
        };
        generate_icon(args).expect("Failed to generate icon");

        let bytes = std::fs::read(&path).unwrap();
        let expected_header = format!("P6\n{} {}\n255\n", size, size);
        assert_eq!(header(size), expected_header);
        assert!(bytes.starts_with(expected_header.as_bytes()));
        assert_eq!(
            bytes.len(),
            expected_header.len() + (size * size * 3) as usize
        );
    }
}

#[test_log::test]
fn test_generate_icon_in_nested_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("out").join("sub").join("icon.ppm");

    let args = Args {
        size: 16,
        ..Args::new(path.clone())
    };
    generate_icon(args).expect("Failed to generate icon");

    let img = image::open(&path)
        .expect("Failed to read icon back")
        .to_rgb8();
    assert_eq!((img.width(), img.height()), (16, 16));
    assert_eq!(img.into_raw(), render(DEFAULT_PALETTE, 0.9, 16));
}

#[test]
fn test_default_layout_is_centered() {
    let layout = Layout::plan(0.9, 1024);
    let sum = layout.stem.left + layout.stem.right;
    assert!(
        (sum - 1023).abs() <= 1,
        "stem {}..{} is off center",
        layout.stem.left,
        layout.stem.right
    );
}

#[test]
fn test_full_scale_glyph_fits_canvas() {
    let size = 512;
    let layout = Layout::plan(1.0, size);
    let max = size as i64 - 1;
    for rect in [layout.bar, layout.stem] {
        assert!(rect.left >= 0 && rect.right <= max);
        assert!(rect.top >= 0 && rect.bottom <= max);
    }

    // Every pixel still renders.
    assert_eq!(render(DEFAULT_PALETTE, 1.0, size).len(), (size * size * 3) as usize);
}

#[test]
fn test_scale_changes_output() {
    let a = render(DEFAULT_PALETTE, 0.9, 64);
    let b = render(DEFAULT_PALETTE, 0.7, 64);
    assert_ne!(a, b);
}

#[test]
fn test_generate_icon_rejects_invalid_scale() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("icon.ppm");

    let args = Args {
        scale: 0.0,
        ..Args::new(path.clone())
    };
    assert!(generate_icon(args).is_err());
    assert!(!path.exists());
}
