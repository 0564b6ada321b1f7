use error_iter::ErrorIter as _;
use log::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("event loop failed")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed")]
    Window(#[from] winit::error::OsError),

    #[error("pixel buffer creation failed")]
    Pixels(#[from] pixels::Error),

    #[error("a {width}x{height} window has no room for a {tile_size}-pixel tile")]
    WindowTooSmall {
        width: u32,
        height: u32,
        tile_size: u32,
    },
}

pub fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
