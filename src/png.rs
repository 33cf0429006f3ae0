use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use image::{
    codecs::png::{PngDecoder, PngEncoder},
    ExtendedColorType, ImageDecoder, ImageEncoder, ImageError,
};
use log::{info, warn};

use crate::{error::Result, raster::PixelBuffer, PlotError};

/// Header facts of a PNG file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub channels: u8,
}

fn io_error(path: &Path, source: std::io::Error) -> PlotError {
    PlotError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_error(path: &Path, source: std::io::Error) -> PlotError {
    PlotError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `buffer` to `path` as a non-interlaced 8-bit RGB PNG.
///
/// A regular file left behind by a failed write is removed.
pub fn write_png(buffer: PixelBuffer, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);

    let image_buf = buffer.into_image();
    let (width, height) = image_buf.dimensions();
    let encoder = PngEncoder::new(&mut writer);
    let mut encoded = encoder
        .write_image(image_buf.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| match e {
            ImageError::IoError(source) => write_error(path, source),
            e => PlotError::from(e),
        });
    if encoded.is_ok() {
        encoded = writer.flush().map_err(|e| write_error(path, e));
    }

    if let Err(e) = encoded {
        drop(writer);
        let is_file = std::fs::metadata(path).is_ok_and(|meta| meta.is_file());
        if is_file {
            if let Err(remove_err) = std::fs::remove_file(path) {
                warn!("could not remove {}: {}", path.display(), remove_err);
            }
        }
        return Err(e);
    }

    info!("wrote {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

pub fn read_png_info(path: &Path) -> Result<PngInfo> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let decoder = PngDecoder::new(BufReader::new(file))?;
    let (width, height) = decoder.dimensions();
    let colour = decoder.color_type();
    let channels = colour.channel_count();

    Ok(PngInfo {
        width,
        height,
        bit_depth: (colour.bits_per_pixel() / channels as u16) as u8,
        channels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{BLUE, WHITE};

    #[test]
    fn test_round_trip_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let buffer = PixelBuffer::new(300, 300, WHITE);

        write_png(buffer, &path).unwrap();

        let info = read_png_info(&path).unwrap();
        assert_eq!(
            info,
            PngInfo {
                width: 300,
                height: 300,
                bit_depth: 8,
                channels: 3,
            }
        );
    }

    #[test]
    fn test_top_row_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.png");
        let mut buffer = PixelBuffer::new(4, 3, WHITE);
        buffer.put(0, 1, BLUE);

        write_png(buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(*decoded.get_pixel(1, 0), BLUE);
        assert_eq!(*decoded.get_pixel(1, 2), WHITE);
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.png");
        let buffer = PixelBuffer::new(2, 2, WHITE);

        let err = write_png(buffer, &path).unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
        assert!(err.to_string().contains("could not be opened for writing"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_is_not_open_failure() {
        let path = Path::new("/dev/full");
        if !path.exists() {
            return;
        }
        let buffer = PixelBuffer::new(300, 300, WHITE);

        let err = write_png(buffer, path).unwrap_err();
        assert!(matches!(err, PlotError::Write { .. }));
        assert!(!err.to_string().contains("could not be opened"));
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_png_info(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
    }
}
