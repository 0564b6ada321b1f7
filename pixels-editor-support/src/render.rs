use life_grid::{GridCell, Loc, WorldGrid};

pub const BACKGROUND_RGBA: [u8; 4] = [0, 0, 0, 0xff];

/// Draws grid cells as square tiles into an RGBA frame the size of the window. Each tile is
/// one pixel narrower than the tile pitch, leaving a background gap between tiles.
#[derive(Clone, Copy, Debug)]
pub struct TileCanvas {
    frame_width: u32,
    frame_height: u32,
    tile_size: u32,
}

impl TileCanvas {
    pub fn new(frame_width: u32, frame_height: u32, tile_size: u32) -> Self {
        assert!(tile_size > 0);
        Self {
            frame_width,
            frame_height,
            tile_size,
        }
    }

    pub fn paint_grid<C>(&self, frame: &mut [u8], grid: &WorldGrid<C>)
    where
        C: GridCell,
    {
        debug_assert_eq!(frame.len(), self.frame_len());
        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&BACKGROUND_RGBA);
        }
        for (index, cell) in grid.cells_iter().enumerate() {
            let loc = Loc::from_grid_index(index, grid.size().width);
            self.paint_tile(frame, loc, cell.color_rgba());
        }
    }

    pub fn paint_cells<C>(&self, frame: &mut [u8], grid: &WorldGrid<C>, locs: &[Loc])
    where
        C: GridCell,
    {
        debug_assert_eq!(frame.len(), self.frame_len());
        for &loc in locs {
            if let Ok(cell) = grid.cell(loc) {
                self.paint_tile(frame, loc, cell.color_rgba());
            }
        }
    }

    pub fn paint_tile(&self, frame: &mut [u8], loc: Loc, color: [u8; 4]) {
        let edge = self.tile_size - 1;
        let left = loc.col * self.tile_size;
        let top = loc.row * self.tile_size;
        if left + edge > self.frame_width || top + edge > self.frame_height {
            return;
        }

        for y in top..top + edge {
            let start = self.pixel_offset(left, y);
            let end = start + 4 * edge as usize;
            for pixel in frame[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        4 * (y as usize * self.frame_width as usize + x as usize)
    }

    fn frame_len(&self) -> usize {
        4 * self.frame_width as usize * self.frame_height as usize
    }
}
