use tracing::{info, warn};

use crate::{
    config::{Config, Mode},
    engine::EngineError,
    map::load_map,
    renderer::{
        FlatShading, RenderSettings, RendererExt, Rgba, Shader, Shading, Software,
        TexturedShading,
    },
    sim::{InputCmd, MoveResult, Player},
    world::{GridMap, TextureBank},
};

/// Everything one frame needs: the map, the player pose, the look and the
/// software backend. Owned by whichever thread renders.
pub struct Engine<S: Shader> {
    grid: GridMap,
    player: Player,
    shader: S,
    renderer: Software,
    settings: RenderSettings,
}

impl<S: Shader> Engine<S> {
    pub fn new(grid: GridMap, player: Player, shader: S, settings: RenderSettings) -> Self {
        let pos = player.camera.pos();
        if !grid.is_walkable(pos.x, pos.y) {
            warn!(
                x = pos.x,
                y = pos.y,
                tile = grid.get(pos.x, pos.y),
                "start position is not an empty cell; the player cannot move"
            );
        }
        Self {
            grid,
            player,
            shader,
            renderer: Software::default(),
            settings,
        }
    }

    #[inline]
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[inline]
    pub fn renderer(&self) -> &Software {
        &self.renderer
    }

    /// Advance the player by one intent snapshot.
    pub fn tick(&mut self, cmd: InputCmd, dt: f64) -> MoveResult {
        self.player.update(&self.grid, cmd, dt)
    }

    /// Render the current pose and loan the finished frame to `submit`.
    pub fn render_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.renderer.draw_frame(
            &self.settings,
            &self.grid,
            &self.player.camera,
            &self.shader,
            submit,
        );
    }

    /// Render into an owned buffer (resized as needed). Returns its size.
    pub fn render_into(&mut self, out: &mut Vec<Rgba>) -> (usize, usize) {
        let mut size = (0, 0);
        self.render_frame(|fb, w, h| {
            out.clear();
            out.extend_from_slice(fb);
            size = (w, h);
        });
        size
    }
}

impl Engine<Shading> {
    /// Validate `config`, load its map and pick the look it asks for.
    pub fn from_config(config: &Config) -> Result<Self, EngineError> {
        config.validate()?;
        let grid = load_map(&config.map, config.mode.map_format())?;

        let shading = match config.mode {
            Mode::Flat => Shading::Flat(FlatShading::default()),
            Mode::Textured => {
                let bank = TextureBank::procedural();
                bank.get(config.floor_texture)?;
                bank.get(config.ceiling_texture)?;
                Shading::Textured(
                    TexturedShading::new(bank)
                        .with_planes(config.floor_texture, config.ceiling_texture),
                )
            }
        };

        let settings = config.render_settings();
        info!(
            mode = ?config.mode,
            width = settings.width,
            height = settings.height,
            minimap = settings.minimap,
            "engine ready"
        );
        Ok(Self::new(grid, config.player(), shading, settings))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Camera, TextureError};
    use glam::dvec2;

    fn room() -> GridMap {
        let (w, h) = (6, 6);
        let cells = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                (x == 0 || y == 0 || x == w - 1 || y == h - 1) as i32
            })
            .collect();
        GridMap::new(w, h, cells).unwrap()
    }

    fn engine() -> Engine<FlatShading> {
        let player = Player::new(Camera::new(dvec2(3.5, 3.5), 0.0, 1.2));
        Engine::new(
            room(),
            player,
            FlatShading::default(),
            RenderSettings {
                width: 32,
                height: 20,
                minimap: false,
            },
        )
    }

    #[test]
    fn tick_moves_the_player() {
        let mut e = engine();
        let r = e.tick(InputCmd::FORWARD, 0.1);
        assert!(r.moved);
        assert!((e.player().camera.pos().x - 4.0).abs() < 1e-12);
        // next step would enter the east wall
        let r = e.tick(InputCmd::FORWARD, 0.3);
        assert!(r.blocked);
    }

    #[test]
    fn render_into_reuses_the_buffer() {
        let mut e = engine();
        let mut buf = vec![0xDEAD; 7];
        let (w, h) = e.render_into(&mut buf);
        assert_eq!((w, h), (32, 20));
        assert_eq!(buf.len(), 32 * 20);
        assert!(buf.iter().all(|&px| px != 0xDEAD));
        assert_eq!(e.renderer().column_hits().len(), 32);
    }

    #[test]
    fn from_config_loads_and_validates() {
        let tmp = tempfile::NamedTempFile::new().expect("tempfile");
        std::fs::write(tmp.path(), "RRRR\nR..R\nR..R\nRRRR\n").unwrap();

        let mut cfg = Config::default();
        cfg.map = tmp.path().to_path_buf();
        cfg.mode = Mode::Flat;
        cfg.start_x = 1.5;
        cfg.start_y = 1.5;
        let e = Engine::from_config(&cfg).unwrap();
        assert_eq!(e.grid().width(), 4);

        cfg.fov = 0.0;
        assert!(matches!(
            Engine::from_config(&cfg),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn unknown_plane_texture_is_rejected() {
        let tmp = tempfile::NamedTempFile::new().expect("tempfile");
        std::fs::write(tmp.path(), "111\n101\n111\n").unwrap();

        let mut cfg = Config::default();
        cfg.map = tmp.path().to_path_buf();
        cfg.floor_texture = 42;
        assert!(matches!(
            Engine::from_config(&cfg),
            Err(EngineError::Texture(TextureError::BadId(42)))
        ));
    }
}
