//! Example: render a single frame of an STL file as plain text
//!
//! Usage: cargo run --example snapshot -- [path/to/file.stl [scale]]

use std::env;
use std::io;
use stlview_core::{stl, Mesh};
use stlview_terminal::{renderer, Framebuffer, ViewerConfig};

const WIDTH: usize = 100;
const HEIGHT: usize = 30;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = ViewerConfig::default();

    let mut mesh = match args.get(1) {
        Some(path) => {
            let scale = match args.get(2) {
                Some(s) => s.parse::<f64>().map_err(|e| {
                    io::Error::new(io::ErrorKind::InvalidInput, format!("bad scale {s:?}: {e}"))
                })?,
                None => 1.0,
            };
            let triangles = stl::read_stl(path, scale)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            Mesh::from_triangles(triangles)
        }
        None => {
            eprintln!("No STL file provided, using default cube...");
            Mesh::cube(50.0)
        }
    };

    let camera = config.initial_camera(WIDTH, HEIGHT);
    let mut framebuffer = Framebuffer::new(WIDTH, HEIGHT);
    let drawn = renderer::render_frame(&mut framebuffer, &mut mesh, &camera, config.shade_color);

    for y in 0..framebuffer.height() {
        println!("{}", framebuffer.row_text(y));
    }
    eprintln!("{} of {} triangles in view", drawn, mesh.len());
    Ok(())
}
