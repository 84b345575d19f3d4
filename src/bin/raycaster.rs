//! First-person grid raycaster in a window.
//!
//! ```bash
//! cargo run --release -- --map assets/map.txt
//! RUST_LOG=debug cargo run --release -- --map assets/map_flat.txt --mode flat
//! ```
//!
//! Arrow keys (or WASD) walk and turn, Escape quits.

use anyhow::Context;
use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

use raycaster_rs::{
    config::Config,
    engine::{Engine, RenderThread},
    renderer::present::letterbox,
    sim::InputCmd,
};

const TITLE: &str = "Raycaster";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let engine = Engine::from_config(&config)
        .with_context(|| format!("cannot start with map {}", config.map.display()))?;
    let render = RenderThread::spawn(engine)?;

    let mut win = Window::new(
        TITLE,
        config.window_width,
        config.window_height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .context("cannot open window")?;
    win.set_target_fps(config.target_fps);

    let mut surface: Vec<u32> = Vec::new();
    let mut recycled = Vec::new();
    let mut shown_fps = None;

    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* --------------- one InputCmd snapshot per frame ---------------- */
        let cmd = poll_input(&win);
        render.request(cmd, std::mem::take(&mut recycled))?;
        let frame = render.next_frame()?;

        if shown_fps != Some(frame.fps) {
            shown_fps = Some(frame.fps);
            win.set_title(&format!("{TITLE}  FPS: {}", frame.fps));
        }

        /* --------------- scale virtual frame into the window ------------ */
        let (ww, wh) = win.get_size();
        let (ww, wh) = (ww.max(1), wh.max(1));
        surface.resize(ww * wh, 0);
        letterbox(&frame.pixels, frame.width, frame.height, &mut surface, ww, wh);
        win.update_with_buffer(&surface, ww, wh)
            .context("cannot present frame")?;

        recycled = frame.pixels;
    }

    render.shutdown();
    Ok(())
}

fn poll_input(win: &Window) -> InputCmd {
    let mut cmd = InputCmd::empty();
    if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
        cmd |= InputCmd::FORWARD;
    }
    if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
        cmd |= InputCmd::BACKWARD;
    }
    if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
        cmd |= InputCmd::TURN_LEFT;
    }
    if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
        cmd |= InputCmd::TURN_RIGHT;
    }
    cmd
}
