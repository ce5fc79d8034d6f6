//! Image writers for a finished framebuffer.
//!
//! Plain-text PPM (`P3`) for color and PGM (`P2`) for depth, plus PNG via
//! the `image` crate. All writers emit rows top-down, so buffer row 0 ends
//! up at the bottom of the file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::Framebuffer;

/// Errors that can occur while writing images.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Framebuffer size {width}x{height} does not fit an image")]
    BufferSize { width: usize, height: usize },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Write the color buffer as a plain `P3` pixmap.
pub fn write_ppm<W: Write>(framebuffer: &Framebuffer, mut writer: W) -> OutputResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", framebuffer.width(), framebuffer.height())?;
    writeln!(writer, "255")?;

    for row in framebuffer.rows_top_down() {
        for [r, g, b] in row {
            write!(writer, "{} {} {} ", r, g, b)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the depth buffer as a plain `P2` graymap with `clip_far` as maxval.
///
/// Negative depths (in front of the image plane) are written as 0.
pub fn write_depth_pgm<W: Write>(framebuffer: &Framebuffer, mut writer: W) -> OutputResult<()> {
    let max = framebuffer.clip_far();

    writeln!(writer, "P2")?;
    writeln!(writer, "{} {}", framebuffer.width(), framebuffer.height())?;
    writeln!(writer, "{}", max)?;

    for row in framebuffer.depth_rows_top_down() {
        for depth in row {
            write!(writer, "{} ", (*depth).clamp(0, max))?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Save the color buffer to a `.ppm` file.
pub fn save_ppm(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let file = File::create(path.as_ref())?;
    write_ppm(framebuffer, BufWriter::new(file))?;
    log::info!("Saved {}", path.as_ref().display());
    Ok(())
}

/// Save the depth buffer to a `.pgm` file.
pub fn save_depth_pgm(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let file = File::create(path.as_ref())?;
    write_depth_pgm(framebuffer, BufWriter::new(file))?;
    log::info!("Saved {}", path.as_ref().display());
    Ok(())
}

/// Convert the color buffer to a top-down RGB image.
pub fn to_rgb_image(framebuffer: &Framebuffer) -> OutputResult<image::RgbImage> {
    let size_error = || OutputError::BufferSize {
        width: framebuffer.width(),
        height: framebuffer.height(),
    };
    let width = u32::try_from(framebuffer.width()).map_err(|_| size_error())?;
    let height = u32::try_from(framebuffer.height()).map_err(|_| size_error())?;

    let bytes: Vec<u8> = framebuffer.rows_top_down().flatten().flatten().copied().collect();
    image::RgbImage::from_raw(width, height, bytes).ok_or_else(size_error)
}

/// Save the color buffer as PNG.
pub fn save_png(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    to_rgb_image(framebuffer)?.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    log::info!("Saved {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundsPolicy, FragmentSink};

    fn marked() -> Framebuffer {
        // 2x2, bottom-left red at depth 5
        let mut fb = Framebuffer::new(2, 2)
            .with_bounds(BoundsPolicy::Full)
            .with_clip_far(10);
        fb.submit(-1, -1, 5.0, [255, 0, 0]);
        fb
    }

    #[test]
    fn test_ppm_is_top_down() {
        let mut out = Vec::new();
        write_ppm(&marked(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "2 2");
        assert_eq!(lines[2], "255");
        assert_eq!(lines[3].trim(), "0 0 0 0 0 0");
        assert_eq!(lines[4].trim(), "255 0 0 0 0 0");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_depth_pgm() {
        let mut fb = marked();
        fb.submit(0, 0, -3.0, [1, 1, 1]);

        let mut out = Vec::new();
        write_depth_pgm(&fb, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "P2");
        assert_eq!(lines[2], "10");
        // Top row: (0, 1) untouched, (1, 1) at -3 clamps to 0
        assert_eq!(lines[3].trim(), "10 0");
        assert_eq!(lines[4].trim(), "5 10");
    }

    #[test]
    fn test_rgb_image_matches_ppm_orientation() {
        let img = to_rgb_image(&marked()).unwrap();

        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }
}
