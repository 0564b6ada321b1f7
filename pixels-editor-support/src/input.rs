use crate::editor::{Brush, Command};
use life_grid::{GridSize, Loc};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Space => Some(Command::Start),
        KeyCode::KeyQ => Some(Command::Stop),
        KeyCode::KeyR => Some(Command::Randomize),
        KeyCode::KeyB => Some(Command::Blank),
        KeyCode::KeyG => Some(Command::GeneratePattern),
        KeyCode::KeyN => Some(Command::SingleStep),
        _ => None,
    }
}

pub fn brush_for_button(button: MouseButton) -> Option<Brush> {
    match button {
        MouseButton::Left => Some(Brush::Spawn),
        MouseButton::Right => Some(Brush::Kill),
        _ => None,
    }
}

/// The tile under frame pixel `(x, y)`, or `None` past the last full row or column.
pub fn tile_at(pixel: (usize, usize), tile_size: u32, grid_size: GridSize) -> Option<Loc> {
    let (x, y) = pixel;
    let tile_size = tile_size as usize;
    let row = u32::try_from(y / tile_size).ok()?;
    let col = u32::try_from(x / tile_size).ok()?;
    let loc = Loc::new(row, col);
    grid_size.contains(loc).then_some(loc)
}

/// The number of whole tiles that fit the window. A zero tile size fits no tiles.
pub fn window_size_to_grid_size(width: u32, height: u32, tile_size: u32) -> GridSize {
    GridSize::new(
        width.checked_div(tile_size).unwrap_or(0),
        height.checked_div(tile_size).unwrap_or(0),
    )
}
