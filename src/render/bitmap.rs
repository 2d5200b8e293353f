use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::{
    error::{MazeError, Result},
    maze::Grid,
};

pub const PATH_COLOR: Luma<u8> = Luma([255]);
pub const WALL_COLOR: Luma<u8> = Luma([0]);

/// Pixel dimensions of a grid drawn with square tiles of `tile_size` pixels.
/// Fails if `tile_size` is zero or either side overflows `u32`.
pub fn pixel_size(width: u16, height: u16, tile_size: u32) -> Result<(u32, u32)> {
    if tile_size == 0 {
        return Err(MazeError::invalid_argument("tile size must be positive"));
    }
    let overflow = || {
        MazeError::invalid_argument(format!(
            "a {}x{} maze with {}px tiles is too large to render",
            width, height, tile_size
        ))
    };
    let pixel_width = (width as u32).checked_mul(tile_size).ok_or_else(overflow)?;
    let pixel_height = (height as u32).checked_mul(tile_size).ok_or_else(overflow)?;
    Ok((pixel_width, pixel_height))
}

/// Draws every cell as a filled `tile_size` square: white for path, black for wall.
pub fn render_bitmap(grid: &Grid, tile_size: u32) -> Result<GrayImage> {
    let (pixel_width, pixel_height) = pixel_size(grid.width(), grid.height(), tile_size)?;
    let image = GrayImage::from_fn(pixel_width, pixel_height, |px, py| {
        let (x, y) = ((px / tile_size) as u16, (py / tile_size) as u16);
        if grid[(x, y)].is_path {
            PATH_COLOR
        } else {
            WALL_COLOR
        }
    });
    tracing::debug!(
        "[render] rendered {}x{} bitmap with {}px tiles",
        pixel_width,
        pixel_height,
        tile_size
    );
    Ok(image)
}

/// Writes the bitmap as a PNG file.
pub fn save_png(image: &GrayImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image.save_with_format(path, ImageFormat::Png)?;
    tracing::info!("[export] saved maze image to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    #[test]
    fn test_pixel_size() {
        assert_eq!(pixel_size(12, 7, 5).unwrap(), (60, 35));
        assert!(matches!(
            pixel_size(12, 7, 0),
            Err(MazeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            pixel_size(u16::MAX, 7, u32::MAX),
            Err(MazeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_bitmap_matches_grid() {
        let (grid, _) = generate_maze(15, 11, Some(8)).unwrap();
        let tile_size = 4;
        let image = render_bitmap(&grid, tile_size).unwrap();
        assert_eq!(image.dimensions(), (60, 44));
        for cell in grid.cells() {
            let expected = if cell.is_path { PATH_COLOR } else { WALL_COLOR };
            let (left, top) = (cell.x as u32 * tile_size, cell.y as u32 * tile_size);
            for py in top..top + tile_size {
                for px in left..left + tile_size {
                    assert_eq!(*image.get_pixel(px, py), expected);
                }
            }
        }
    }

    #[test]
    fn test_png_round_trip() {
        let (grid, _) = generate_maze(12, 12, Some(21)).unwrap();
        let image = render_bitmap(&grid, 3).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.png");
        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().into_luma8();
        assert_eq!(loaded.dimensions(), (36, 36));
        assert_eq!(loaded.as_raw(), image.as_raw());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let image = GrayImage::new(2, 2);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("maze.png");
        assert!(matches!(save_png(&image, &path), Err(MazeError::Image(_))));
    }
}
