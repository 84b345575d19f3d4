use crate::{
    renderer::{FLAT_SIDE_BRIGHTNESS, HALF_BRIGHTNESS, Rgba, rgb, scale, software::Side},
    world::{NO_TEXTURE, PROCEDURAL_SIZE, TextureBank, TextureId, Tile},
};

/// Colour capability plugged into the shared raycasting pipeline.
///
/// Texel coordinates are integers in the grid reported by
/// [`Shader::texel_size`]; implementations may ignore them.
pub trait Shader {
    /// `(width, height)` of the texel grid, both powers of two.
    fn texel_size(&self) -> (usize, usize);

    fn wall_color(&self, tile: Tile, side: Side, u: usize, v: usize) -> Rgba;

    fn floor_color(&self, u: usize, v: usize) -> Rgba;

    fn ceiling_color(&self, u: usize, v: usize) -> Rgba;

    /// Fixed colour for a whole screen row. `Some` skips floor / ceiling
    /// projection for that row entirely.
    fn backdrop(&self, _row: usize, _height: usize) -> Option<Rgba> {
        None
    }
}

/*──────────────────────────── flat colours ───────────────────────────*/

/// Untextured look: solid wall colours, sky / floor gradient that ignores
/// the camera.
#[derive(Clone, Copy, Debug)]
pub struct FlatShading {
    /// Colour for tile value 1 (`R` in the map).
    pub red_wall: Rgba,
    /// Colour for every other wall value.
    pub other_wall: Rgba,
}

impl Default for FlatShading {
    fn default() -> Self {
        Self {
            red_wall: rgb(150, 0, 0),
            other_wall: rgb(255, 255, 255),
        }
    }
}

impl Shader for FlatShading {
    fn texel_size(&self) -> (usize, usize) {
        (1, 1)
    }

    fn wall_color(&self, tile: Tile, side: Side, _u: usize, _v: usize) -> Rgba {
        let base = if tile == 1 {
            self.red_wall
        } else {
            self.other_wall
        };
        match side {
            Side::X => base,
            Side::Y => scale(base, FLAT_SIDE_BRIGHTNESS),
        }
    }

    fn floor_color(&self, _u: usize, _v: usize) -> Rgba {
        rgb(128, 128, 128)
    }

    fn ceiling_color(&self, _u: usize, _v: usize) -> Rgba {
        rgb(255, 125, 225)
    }

    fn backdrop(&self, row: usize, height: usize) -> Option<Rgba> {
        let mid = height / 2;
        let color = if row < mid {
            // sky: red channel fades one step per row
            let r = 255usize.saturating_sub(row) as u8;
            rgb(r, 125, 225)
        } else {
            let g = 150usize.saturating_sub(22 + (row - mid)) as u8;
            rgb(g, g, g)
        };
        Some(color)
    }
}

/*────────────────────────────── textures ─────────────────────────────*/

/// Textured look: wall tiles index the bank directly, floor and ceiling use
/// two fixed textures. Every plane pixel is drawn at half brightness.
pub struct TexturedShading {
    bank: TextureBank,
    floor: TextureId,
    ceiling: TextureId,
    texel: (usize, usize),
}

impl TexturedShading {
    /// Default floor texture (grey XOR pattern).
    pub const FLOOR: TextureId = 4;
    /// Default ceiling texture (red bricks).
    pub const CEILING: TextureId = 6;

    pub fn new(bank: TextureBank) -> Self {
        Self {
            bank,
            floor: Self::FLOOR,
            ceiling: Self::CEILING,
            texel: (PROCEDURAL_SIZE, PROCEDURAL_SIZE),
        }
    }

    pub fn with_planes(mut self, floor: TextureId, ceiling: TextureId) -> Self {
        self.floor = floor;
        self.ceiling = ceiling;
        self
    }

    /// Sample `id` at grid texel `(u, v)`, rescaled to the texture's own
    /// size. Both sides are powers of two, so the rescale is exact.
    #[inline(always)]
    fn texel(&self, id: TextureId, u: usize, v: usize) -> Rgba {
        let tex = self.bank.get_or_fallback(id);
        let (grid_w, grid_h) = self.texel;
        tex.sample(u * tex.width() / grid_w, v * tex.height() / grid_h)
    }
}

impl Shader for TexturedShading {
    fn texel_size(&self) -> (usize, usize) {
        self.texel
    }

    fn wall_color(&self, tile: Tile, side: Side, u: usize, v: usize) -> Rgba {
        let id = TextureId::try_from(tile).unwrap_or(NO_TEXTURE);
        let color = self.texel(id, u, v);
        match side {
            Side::X => color,
            Side::Y => scale(color, HALF_BRIGHTNESS),
        }
    }

    fn floor_color(&self, u: usize, v: usize) -> Rgba {
        scale(self.texel(self.floor, u, v), HALF_BRIGHTNESS)
    }

    fn ceiling_color(&self, u: usize, v: usize) -> Rgba {
        scale(self.texel(self.ceiling, u, v), HALF_BRIGHTNESS)
    }
}

/*────────────────────────── runtime selection ────────────────────────*/

/// Either look, chosen at startup.
pub enum Shading {
    Flat(FlatShading),
    Textured(TexturedShading),
}

impl Shader for Shading {
    fn texel_size(&self) -> (usize, usize) {
        match self {
            Shading::Flat(s) => s.texel_size(),
            Shading::Textured(s) => s.texel_size(),
        }
    }

    #[inline]
    fn wall_color(&self, tile: Tile, side: Side, u: usize, v: usize) -> Rgba {
        match self {
            Shading::Flat(s) => s.wall_color(tile, side, u, v),
            Shading::Textured(s) => s.wall_color(tile, side, u, v),
        }
    }

    #[inline]
    fn floor_color(&self, u: usize, v: usize) -> Rgba {
        match self {
            Shading::Flat(s) => s.floor_color(u, v),
            Shading::Textured(s) => s.floor_color(u, v),
        }
    }

    #[inline]
    fn ceiling_color(&self, u: usize, v: usize) -> Rgba {
        match self {
            Shading::Flat(s) => s.ceiling_color(u, v),
            Shading::Textured(s) => s.ceiling_color(u, v),
        }
    }

    fn backdrop(&self, row: usize, height: usize) -> Option<Rgba> {
        match self {
            Shading::Flat(s) => s.backdrop(row, height),
            Shading::Textured(s) => s.backdrop(row, height),
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
