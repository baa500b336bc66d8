/// Terminal front-end for the wireframe renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self},
};
use std::fs::File;
use std::io::{self, stdout};
use std::path::Path;
use std::time::{Duration, Instant};
use wire3d_core::{Matrix4x4, Renderer, Scene, Transform};

pub mod canvas;
pub mod demo;

pub use canvas::TerminalCanvas;

/// Environment variable naming a file to receive log output
pub const LOG_FILE_ENV: &str = "WIRE3D_LOG_FILE";

/// Logger configured from `RUST_LOG` (default `warn`).
///
/// With `log_file` set, records go to that file. Otherwise they go to stderr,
/// which draws over the frame while the app owns the alternate screen.
pub fn logger_builder(log_file: Option<&Path>) -> io::Result<env_logger::Builder> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    Ok(builder)
}

/// Tunables for the interactive loop
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub target_fps: u32,
    /// Degrees each instance turns per frame while spinning
    pub spin_speed: f32,
    /// Degrees per yaw key press
    pub yaw_step: f32,
    /// World units per move key press
    pub move_step: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            spin_speed: 1.5,
            yaw_step: 5.0,
            move_step: 0.25,
        }
    }
}

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    renderer: Renderer,
    canvas: TerminalCanvas,
    config: AppConfig,
    /// Orientation each instance was created with; spin is applied on top
    base_orientations: Vec<Matrix4x4>,
    camera_yaw: f32,
    spin: f32,
    spinning: bool,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> io::Result<Self> {
        Self::with_config(scene, Renderer::default(), AppConfig::default())
    }

    /// The camera's starting orientation is treated as zero yaw
    pub fn with_config(scene: Scene, renderer: Renderer, config: AppConfig) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let base_orientations = scene
            .instances
            .iter()
            .map(|instance| *instance.orientation())
            .collect();

        Ok(Self {
            scene,
            renderer,
            canvas: TerminalCanvas::for_terminal(columns, rows),
            config,
            base_orientations,
            camera_yaw: 0.0,
            spin: 0.0,
            spinning: true,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / self.config.target_fps.max(1) as u64);
        let initial_orientation = *self.scene.camera.orientation();

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?, &initial_orientation);
            }

            self.update();
            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, initial_orientation: &Matrix4x4) {
        match event {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.turn_camera(-self.config.yaw_step, initial_orientation);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.turn_camera(self.config.yaw_step, initial_orientation);
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.move_camera(self.config.move_step);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.move_camera(-self.config.move_step);
                }
                KeyCode::Char(' ') => {
                    self.spinning = !self.spinning;
                }
                _ => {}
            },
            Event::Resize(columns, rows) => {
                log::debug!("terminal resized to {columns}x{rows}");
                self.canvas = TerminalCanvas::for_terminal(columns, rows);
            }
            _ => {}
        }
    }

    fn turn_camera(&mut self, degrees: f32, initial_orientation: &Matrix4x4) {
        self.camera_yaw += degrees;
        self.scene
            .camera
            .set_orientation(initial_orientation * Transform::rotation_around_up_axis(self.camera_yaw));
    }

    fn move_camera(&mut self, distance: f32) {
        let camera = &mut self.scene.camera;
        camera.set_position(camera.position() + camera.forward() * distance);
    }

    fn update(&mut self) {
        if !self.spinning {
            return;
        }

        self.spin = (self.spin + self.config.spin_speed) % 360.0;
        let spin = Transform::rotation_around_up_axis(self.spin);
        for (instance, base) in self.scene.instances.iter_mut().zip(&self.base_orientations) {
            instance.set_orientation(base * spin);
            instance.rebuild_transform();
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        self.canvas.set_status(format!(
            "Wire3D | FPS: {:.1} | A/D=Turn W/S=Move Space=Spin Q=Quit",
            self.fps
        ));

        self.renderer.render(&self.scene, &mut self.canvas)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_logger_writes_to_file() {
        let path = std::env::temp_dir().join(format!("wire3d-log-{}.txt", std::process::id()));
        let logger = logger_builder(Some(&path))
            .unwrap()
            .filter_level(log::LevelFilter::Warn)
            .build();

        logger.log(
            &log::Record::builder()
                .args(format_args!("instance 0 changed without rebuild_transform"))
                .level(log::Level::Warn)
                .target("wire3d_core::renderer")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(written.contains("instance 0 changed without rebuild_transform"));
    }
}
