/// Placeholder extension icons
///
/// The files get a `.png` name because that is what `manifest.json` references, but the
/// content is SVG markup. Nothing is rasterized.
use std::path::{Path, PathBuf};

pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

pub const DEFAULT_ICON_DIR: &str = "icons";

/// SVG document for a square icon of `size` pixels.
pub fn svg_icon(size: u32) -> String {
    let size_f = f64::from(size);
    let accent_offset = size_f * 0.6;
    let accent_size = size_f * 0.3;

    format!(
        r##"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
    <rect width="100%" height="100%" fill="#cc0000" />
    <text x="50%" y="50%" font-family="Arial" font-size="{font_size}px"
          fill="white" text-anchor="middle" dominant-baseline="middle">YT</text>
    <rect x="{accent_offset}" y="{accent_offset}" width="{accent_size}" height="{accent_size}" fill="white" />
  </svg>"##,
        font_size = size_f / 3.0,
    )
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

/// Write one icon per entry of `sizes` into `dir`, creating it if needed.
///
/// Returns the written paths in `sizes` order.
pub fn write_icons(dir: &Path, sizes: &[u32]) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let path = dir.join(icon_file_name(size));
        std::fs::write(&path, svg_icon(size))?;
        log::info!("Created {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_file_names() {
        let names: Vec<String> = ICON_SIZES.iter().map(|&s| icon_file_name(s)).collect();

        assert_eq!(names, vec!["icon16.png", "icon48.png", "icon128.png"]);
    }

    #[test]
    fn test_svg_icon_16() {
        let svg = svg_icon(16);

        assert!(svg.starts_with(r#"<svg width="16" height="16" xmlns="http://www.w3.org/2000/svg">"#));
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#cc0000" />"##));
        assert!(svg.contains(r#"font-size="5.333333333333333px""#));
        assert!(svg.contains(r#"<rect x="9.6" y="9.6" width="4.8" height="4.8" fill="white" />"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_icon_128_accent_scales() {
        let svg = svg_icon(128);

        assert!(svg.contains(r#"x="76.8" y="76.8" width="38.4" height="38.4""#));
        assert!(svg.contains(">YT</text>"));
    }

    #[test]
    fn test_svg_is_well_formed() {
        for size in ICON_SIZES {
            let svg = svg_icon(size);
            let reader = xml::reader::EventReader::from_str(&svg);
            assert!(reader.into_iter().all(|event| event.is_ok()), "size {}", size);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_write_icons() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(DEFAULT_ICON_DIR);

        let written = write_icons(&out, &ICON_SIZES).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(written[2], out.join("icon128.png"));
        let content = std::fs::read_to_string(&written[0]).unwrap();
        assert_eq!(content, svg_icon(16));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_write_icons_existing_dir() {
        let dir = tempfile::tempdir().unwrap();

        write_icons(dir.path(), &[16]).unwrap();
        let written = write_icons(dir.path(), &[16]).unwrap();

        assert_eq!(written, vec![dir.path().join("icon16.png")]);
    }
}
