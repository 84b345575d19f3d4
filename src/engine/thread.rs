//! Dedicated render thread.
//!
//! The thread owns the [`Engine`] exclusively (moved in via
//! `thread::spawn`). The window thread sends one [`FrameRequest`] per
//! frame over a bounded crossbeam channel and receives the finished
//! [`Frame`] back on a second one. Presented buffers travel back inside
//! the next request so steady-state frames allocate nothing.
//!
//! Dropping the request sender is the stop signal.

use std::{
    thread::{self, JoinHandle},
    time::Instant,
};

use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

use crate::{
    engine::{Engine, EngineError},
    renderer::{Rgba, Shader},
    sim::{FpsCounter, FrameClock, InputCmd},
};

/// One frame's worth of input plus a buffer to render into.
#[derive(Debug, Default)]
pub struct FrameRequest {
    pub cmd: InputCmd,
    /// Previously presented pixels, returned for reuse. May be empty.
    pub recycled: Vec<Rgba>,
}

/// Finished frame handed to the window thread.
#[derive(Debug)]
pub struct Frame {
    pub pixels: Vec<Rgba>,
    pub width: usize,
    pub height: usize,
    /// Frames rendered during the last full second.
    pub fps: u32,
}

pub struct RenderThread {
    req_tx: Option<Sender<FrameRequest>>,
    frame_rx: Option<Receiver<Frame>>,
    handle: Option<JoinHandle<()>>,
}

impl RenderThread {
    /// Move `engine` onto a new thread and start serving requests.
    pub fn spawn<S>(engine: Engine<S>) -> Result<Self, EngineError>
    where
        S: Shader + Send + 'static,
    {
        // one frame in flight each way
        let (req_tx, req_rx) = crossbeam_channel::bounded(1);
        let (frame_tx, frame_rx) = crossbeam_channel::bounded(1);

        let handle = thread::Builder::new()
            .name("raycaster-render".into())
            .spawn(move || run(engine, req_rx, frame_tx))
            .map_err(EngineError::Spawn)?;

        Ok(Self {
            req_tx: Some(req_tx),
            frame_rx: Some(frame_rx),
            handle: Some(handle),
        })
    }

    /// Queue the next frame. Blocks while a previous request is unread.
    pub fn request(&self, cmd: InputCmd, recycled: Vec<Rgba>) -> Result<(), EngineError> {
        let tx = self.req_tx.as_ref().ok_or(EngineError::RenderThreadGone)?;
        tx.send(FrameRequest { cmd, recycled })
            .map_err(|_| EngineError::RenderThreadGone)
    }

    /// Wait for the next finished frame.
    pub fn next_frame(&self) -> Result<Frame, EngineError> {
        let rx = self.frame_rx.as_ref().ok_or(EngineError::RenderThreadGone)?;
        rx.recv().map_err(|_| EngineError::RenderThreadGone)
    }

    /// Stop the thread and wait for it. `false` if it panicked.
    pub fn shutdown(mut self) -> bool {
        self.stop()
    }

    fn stop(&mut self) -> bool {
        // both ends gone: a blocked `send` or `recv` on the thread fails
        self.req_tx.take();
        self.frame_rx.take();
        match self.handle.take() {
            Some(handle) => handle.join().is_ok(),
            None => true,
        }
    }
}

impl Drop for RenderThread {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Render loop: one frame per request until the sender goes away.
fn run<S: Shader>(mut engine: Engine<S>, req_rx: Receiver<FrameRequest>, frame_tx: Sender<Frame>) {
    let start = Instant::now();
    let mut clock = FrameClock::new(start);
    let mut fps = FpsCounter::new(start);

    while let Ok(FrameRequest { cmd, recycled }) = req_rx.recv() {
        let dt = clock.tick(Instant::now());
        engine.tick(cmd, dt);

        let mut pixels = recycled;
        let (width, height) = engine.render_into(&mut pixels);

        if let Some(n) = fps.frame(Instant::now()) {
            let pos = engine.player().camera.pos();
            debug!(fps = n, x = pos.x, y = pos.y, "frame rate");
        }

        let frame = Frame {
            pixels,
            width,
            height,
            fps: fps.fps(),
        };
        if frame_tx.send(frame).is_err() {
            break;
        }
    }
    debug!("render thread stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        renderer::{FlatShading, RenderSettings},
        sim::Player,
        world::{Camera, GridMap},
    };
    use glam::dvec2;

    fn engine() -> Engine<FlatShading> {
        let grid = GridMap::new(3, 3, vec![1, 1, 1, 1, 0, 1, 1, 1, 1]).unwrap();
        let player = Player::new(Camera::new(dvec2(1.5, 1.5), 0.0, 1.0));
        let settings = RenderSettings {
            width: 16,
            height: 10,
            minimap: true,
        };
        Engine::new(grid, player, FlatShading::default(), settings)
    }

    #[test]
    fn frames_round_trip_and_buffers_are_recycled() {
        let rt = RenderThread::spawn(engine()).unwrap();

        rt.request(InputCmd::empty(), Vec::new()).unwrap();
        let frame = rt.next_frame().unwrap();
        assert_eq!((frame.width, frame.height), (16, 10));
        assert_eq!(frame.pixels.len(), 160);

        let ptr = frame.pixels.as_ptr();
        rt.request(InputCmd::TURN_LEFT, frame.pixels).unwrap();
        let frame = rt.next_frame().unwrap();
        // same allocation came back
        assert_eq!(frame.pixels.as_ptr(), ptr);

        assert!(rt.shutdown());
    }

    #[test]
    fn dropping_stops_the_thread() {
        let rt = RenderThread::spawn(engine()).unwrap();
        rt.request(InputCmd::FORWARD, Vec::new()).unwrap();
        // frame never collected; drop must still join cleanly
        drop(rt);
    }
}
