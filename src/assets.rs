//! Sprite loading with a visible placeholder fallback.
//!
//! Sprites are plain text files, one row per line, one palette character per
//! pixel. The default set is compiled into the binary; a sprite directory
//! passed on the command line overrides it. A sprite that cannot be loaded
//! is replaced by a solid magenta block so the game still runs and the
//! missing file is obvious on screen.

use std::fs;
use std::io;
use std::path::Path;

pub const BURGER_FILE: &str = "burger.txt";
pub const BARRIER_FILE: &str = "fries.txt";
pub const LOGO_FILE: &str = "logo.txt";

const BUNDLED_BURGER: &str = include_str!("../assets/burger.txt");
const BUNDLED_BARRIER: &str = include_str!("../assets/fries.txt");
const BUNDLED_LOGO: &str = include_str!("../assets/logo.txt");

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const PLACEHOLDER_COLOR: Rgb = Rgb(255, 0, 255);

/// Palette used by sprite files. `.` and space are transparent.
fn palette(c: char) -> Option<Option<Rgb>> {
    let color = match c {
        '.' | ' ' => return Some(None),
        'B' => Rgb(214, 140, 60),  // bun
        'S' => Rgb(250, 235, 190), // sesame
        'L' => Rgb(90, 190, 60),   // lettuce
        'C' => Rgb(255, 200, 40),  // cheese
        'M' => Rgb(110, 55, 30),   // patty
        'T' => Rgb(220, 50, 40),   // tomato
        'F' => Rgb(255, 215, 90),  // fry
        'D' => Rgb(215, 160, 50),  // dark fry
        'K' => Rgb(200, 20, 30),   // ketchup
        'W' => Rgb(255, 255, 255),
        'P' => Rgb(150, 60, 255),
        _ => return None,
    };
    Some(Some(color))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: usize,
    height: usize,
    pixels: Vec<Option<Rgb>>,
}

impl Sprite {
    /// Parse sprite text. Short rows are padded with transparency; trailing
    /// empty lines are ignored, but a row of spaces is a transparent row.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        while matches!(rows.last(), Some(row) if row.is_empty()) {
            rows.pop();
        }
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err("sprite has no pixels".to_string());
        }

        let mut pixels = Vec::with_capacity(width * rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            let mut count = 0;
            for (col_idx, c) in row.chars().enumerate() {
                let pixel = palette(c).ok_or_else(|| {
                    format!(
                        "unknown palette character {:?} at row {}, column {}",
                        c,
                        row_idx + 1,
                        col_idx + 1
                    )
                })?;
                pixels.push(pixel);
                count += 1;
            }
            pixels.extend(std::iter::repeat(None).take(width - count));
        }

        Ok(Self {
            width,
            height: rows.len(),
            pixels,
        })
    }

    /// Solid magenta block.
    pub fn placeholder(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![Some(PLACEHOLDER_COLOR); width * height],
        }
    }

    /// Color at normalized coordinates, `u` and `v` in `[0, 1)`.
    /// `None` means transparent or outside the sprite.
    pub fn sample(&self, u: f64, v: f64) -> Option<Rgb> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let col = ((u * self.width as f64) as usize).min(self.width - 1);
        let row = ((v * self.height as f64) as usize).min(self.height - 1);
        self.pixels.get(row * self.width + col).copied().flatten()
    }

    /// Same as [`Sprite::sample`] with the sprite flipped upside down.
    pub fn sample_flipped(&self, u: f64, v: f64) -> Option<Rgb> {
        let row_v = 1.0 - v;
        // Keep v == 0 inside the sprite after flipping.
        self.sample(u, if row_v >= 1.0 { 1.0 - f64::EPSILON } else { row_v })
    }
}

/// Read and parse a sprite file.
pub fn load_sprite(path: &Path) -> io::Result<Sprite> {
    let text = fs::read_to_string(path)?;
    Sprite::parse(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Load a sprite, substituting a placeholder of the given size on failure.
pub fn load_sprite_or_placeholder(path: &Path, width: usize, height: usize) -> Sprite {
    match load_sprite(path) {
        Ok(sprite) => sprite,
        Err(e) => {
            log::warn!("could not load sprite {}: {}", path.display(), e);
            Sprite::placeholder(width, height)
        }
    }
}

/// Parse a sprite compiled into the binary, substituting a placeholder on failure.
fn bundled_or_placeholder(name: &str, text: &str, width: usize, height: usize) -> Sprite {
    match Sprite::parse(text) {
        Ok(sprite) => sprite,
        Err(e) => {
            log::warn!("bundled sprite {} is invalid: {}", name, e);
            Sprite::placeholder(width, height)
        }
    }
}

/// Every sprite the screens draw.
#[derive(Debug, Clone)]
pub struct Assets {
    pub burger: Sprite,
    pub barrier: Sprite,
    pub logo: Sprite,
}

impl Assets {
    /// The sprites shipped inside the binary.
    pub fn bundled() -> Self {
        Self {
            burger: bundled_or_placeholder(BURGER_FILE, BUNDLED_BURGER, 9, 9),
            barrier: bundled_or_placeholder(BARRIER_FILE, BUNDLED_BARRIER, 12, 30),
            logo: bundled_or_placeholder(LOGO_FILE, BUNDLED_LOGO, 8, 10),
        }
    }

    /// Load all sprites from `dir`; missing ones become placeholders.
    pub fn load(dir: &Path) -> Self {
        Self {
            burger: load_sprite_or_placeholder(&dir.join(BURGER_FILE), 9, 9),
            barrier: load_sprite_or_placeholder(&dir.join(BARRIER_FILE), 12, 30),
            logo: load_sprite_or_placeholder(&dir.join(LOGO_FILE), 8, 10),
        }
    }

    pub fn placeholders() -> Self {
        Self {
            burger: Sprite::placeholder(9, 9),
            barrier: Sprite::placeholder(12, 30),
            logo: Sprite::placeholder(8, 10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pads_short_rows() {
        let sprite = Sprite::parse("BB\nB\n").unwrap();
        assert_eq!(sprite.width, 2);
        assert_eq!(sprite.height, 2);
        assert_eq!(sprite.sample(0.75, 0.75), None);
        assert_eq!(sprite.sample(0.25, 0.75), Some(Rgb(214, 140, 60)));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let err = Sprite::parse("BB\nBZ\n").unwrap_err();
        assert!(err.contains("row 2, column 2"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Sprite::parse("").is_err());
        assert!(Sprite::parse("\n\n").is_err());
    }

    #[test]
    fn test_parse_keeps_rows_of_spaces() {
        let sprite = Sprite::parse("TT\n  \nLL\n\n").unwrap();
        assert_eq!(sprite.height, 3);
        assert_eq!(sprite.sample(0.5, 0.1), Some(Rgb(220, 50, 40)));
        assert_eq!(sprite.sample(0.5, 0.5), None);
        assert_eq!(sprite.sample(0.5, 0.9), Some(Rgb(90, 190, 60)));
    }

    #[test]
    fn test_parse_ignores_trailing_blank_lines_only() {
        let sprite = Sprite::parse("\nT\n\n\n").unwrap();
        assert_eq!(sprite.height, 2);
        assert_eq!(sprite.sample(0.5, 0.25), None);
        assert_eq!(sprite.sample(0.5, 0.75), Some(Rgb(220, 50, 40)));
    }

    #[test]
    fn test_sample_outside_is_transparent() {
        let sprite = Sprite::placeholder(2, 2);
        assert_eq!(sprite.sample(-0.1, 0.5), None);
        assert_eq!(sprite.sample(0.5, 1.0), None);
        assert_eq!(sprite.sample(0.5, 0.5), Some(PLACEHOLDER_COLOR));
    }

    #[test]
    fn test_sample_flipped() {
        let sprite = Sprite::parse("T\nL\n").unwrap();
        assert_eq!(sprite.sample(0.5, 0.0), Some(Rgb(220, 50, 40)));
        assert_eq!(sprite.sample_flipped(0.5, 0.0), Some(Rgb(90, 190, 60)));
        assert_eq!(sprite.sample_flipped(0.5, 0.9), Some(Rgb(220, 50, 40)));
    }

    #[test]
    fn test_missing_file_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let sprite = load_sprite_or_placeholder(&dir.path().join("nope.txt"), 3, 4);
        assert_eq!(sprite, Sprite::placeholder(3, 4));
    }

    #[test]
    fn test_load_sprite_reports_bad_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "???").unwrap();
        let err = load_sprite(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_bundled_assets_match_files_and_are_not_placeholders() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let bundled = Assets::bundled();
        let loaded = Assets::load(&dir);
        assert_eq!(bundled.burger, loaded.burger);
        assert_eq!(bundled.barrier, loaded.barrier);
        assert_eq!(bundled.logo, loaded.logo);
        assert_ne!(bundled.burger, Sprite::placeholder(9, 9));
    }

    #[test]
    fn test_bundled_assets_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for file in [BURGER_FILE, BARRIER_FILE, LOGO_FILE] {
            assert!(load_sprite(&dir.join(file)).is_ok(), "{} should parse", file);
        }
    }
}
