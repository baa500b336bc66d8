/// Wire3D Terminal Demo - two wireframe cubes
///
/// Controls:
///   - A/D / Left/Right: Turn the camera
///   - W/S / Up/Down: Move the camera
///   - Space: Toggle instance spin
///   - Q/ESC: Quit
///
/// Logs go to stderr and overwrite the rendered frame. Set `WIRE3D_LOG_FILE`
/// to a path to send them to a file instead.
use std::env;
use std::io;
use std::path::PathBuf;
use wire3d_terminal::{demo, logger_builder, TerminalApp, LOG_FILE_ENV};

fn main() -> io::Result<()> {
    let log_file = env::var_os(LOG_FILE_ENV).map(PathBuf::from);
    logger_builder(log_file.as_deref())?.init();

    let scene = demo::two_cubes();
    log::info!("starting terminal renderer with {} instances", scene.instances.len());

    let mut app = TerminalApp::new(scene)?;
    app.run()
}
