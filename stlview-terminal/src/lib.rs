//! Terminal front end: renders an STL mesh as colored block characters
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::ResetColor,
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::Duration;
use stlview_core::{Camera, Mesh, Pivot, Turntable};

pub mod config;
pub mod framebuffer;
pub mod input;
pub mod renderer;

pub use config::ViewerConfig;
pub use framebuffer::Framebuffer;
pub use input::{parse_key_event, Action};

/// Terminal rows kept free below the frame
pub const RESERVED_ROWS: u16 = 2;

/// Framebuffer size for a terminal of `columns` x `rows`
pub fn frame_size(columns: u16, rows: u16) -> (usize, usize) {
    (columns as usize, rows.saturating_sub(RESERVED_ROWS) as usize)
}

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    mesh: Mesh,
    camera: Camera,
    framebuffer: Framebuffer,
    config: ViewerConfig,
    pivot: Pivot,
    turntable: Option<Turntable>,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: ViewerConfig) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let (width, height) = frame_size(columns, rows);

        let pivot = mesh.pivot();
        tracing::debug!(x = pivot.x, z = pivot.z, "rotation pivot");
        let turntable = config
            .rotate
            .then(|| Turntable::new(pivot).with_step(config.rotation_step));

        Ok(Self {
            mesh,
            camera: config.initial_camera(width, height),
            framebuffer: Framebuffer::new(width, height),
            config,
            pivot,
            turntable,
        })
    }

    /// Take over the terminal and render until a quit key is pressed
    pub fn run(&mut self) -> io::Result<()> {
        let _session = Session::start()?;
        self.main_loop()
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        // No frame pacing: the key poll is the only point where the loop
        // looks outside itself, and it never waits.
        loop {
            self.sync_size(&mut stdout)?;
            renderer::render_frame(
                &mut self.framebuffer,
                &mut self.mesh,
                &self.camera,
                self.config.shade_color,
            );

            if let Some(action) = self.poll_input()? {
                if action == Action::Quit {
                    tracing::info!("quit requested");
                    return Ok(());
                }
                action.apply(&mut self.camera, &self.config);
            }

            let position = self.camera.position;
            self.framebuffer
                .text(&format!("X: {}, Y: {}, Z: {}", position.x, position.y, position.z));
            self.framebuffer
                .text(&format!("Rotating around: {}, {}", self.pivot.x, self.pivot.z));
            self.framebuffer.flush(&mut stdout)?;

            if let Some(turntable) = &self.turntable {
                turntable.rotate(&mut self.mesh.polygons);
            }
        }
    }

    /// Reallocate the framebuffer if the terminal changed size
    fn sync_size<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let (columns, rows) = terminal::size()?;
        let (width, height) = frame_size(columns, rows);
        if self.framebuffer.resize_if_needed(width, height) {
            tracing::debug!(width, height, "framebuffer resized");
            queue!(out, cursor::Hide)?;
        }
        Ok(())
    }

    /// Read at most one pending key without blocking
    fn poll_input(&self) -> io::Result<Option<Action>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key_event) => {
                let action = parse_key_event(key_event);
                tracing::trace!(?action, "key");
                Ok(Some(action))
            }
            _ => Ok(None),
        }
    }
}

/// Raw mode, alternate screen and hidden cursor for as long as it lives
struct Session;

impl Session {
    fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
