// Wall / plane textures, addressed by the same number the map stores.

use crate::renderer::{Rgba, rgb};

/// Index into a [`TextureBank`]. For textured maps this is the tile value.
pub type TextureId = u16;

/// Slot of the fallback texture. Tile `0` is empty space, so no wall ever
/// asks for it on purpose.
pub const NO_TEXTURE: TextureId = 0;

/// Edge length of the generated texture set.
pub const PROCEDURAL_SIZE: usize = 64;

/// Packed **0x00RRGGBB** texels, row-major.
///
/// Width and height are powers of two: [`Texture::sample`] wraps with a mask.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    w: usize,
    h: usize,
    pixels: Vec<Rgba>,
}

/// 8×8 magenta / black checkerboard, hard to miss on screen.
impl Default for Texture {
    fn default() -> Self {
        let pixels = (0..64)
            .map(|i| if (i % 8 + i / 8) % 2 == 0 { 0x00_FF00FF } else { 0 })
            .collect();
        Texture {
            name: "FALLBACK".to_owned(),
            w: 8,
            h: 8,
            pixels,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("a texture called `{0}` is already in the bank")]
    Duplicate(String),

    #[error("no texture with id {0}")]
    BadId(TextureId),

    #[error("texture size {w}x{h} is not a power of two")]
    NotPowerOfTwo { w: usize, h: usize },

    #[error("pixel count {got} does not match {w}x{h}")]
    PixelCount { w: usize, h: usize, got: usize },
}

impl Texture {
    pub fn new<S: Into<String>>(
        name: S,
        w: usize,
        h: usize,
        pixels: Vec<Rgba>,
    ) -> Result<Self, TextureError> {
        if !w.is_power_of_two() || !h.is_power_of_two() {
            return Err(TextureError::NotPowerOfTwo { w, h });
        }
        if pixels.len() != w * h {
            return Err(TextureError::PixelCount {
                w,
                h,
                got: pixels.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            w,
            h,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Texel at `(u, v)`; both wrap around the texture edges.
    #[inline(always)]
    pub fn sample(&self, u: usize, v: usize) -> Rgba {
        self.pixels[(v & (self.h - 1)) * self.w + (u & (self.w - 1))]
    }
}

/// Id-indexed texture storage. Slot [`NO_TEXTURE`] always holds the
/// fallback; real textures start at id 1.
#[derive(Clone, Debug)]
pub struct TextureBank {
    slots: Vec<Texture>,
}

impl Default for TextureBank {
    fn default() -> Self {
        Self::with_fallback(Texture::default())
    }
}

impl TextureBank {
    pub fn with_fallback(fallback: Texture) -> Self {
        Self {
            slots: vec![fallback],
        }
    }

    /// Fallback plus the eight generated textures, ids `1..=8`.
    pub fn procedural() -> Self {
        let mut bank = Self::default();
        for tex in procedural::generate(PROCEDURAL_SIZE) {
            if let Err(err) = bank.push(tex) {
                tracing::warn!("skipping generated texture: {err}");
            }
        }
        tracing::info!(count = bank.len(), size = PROCEDURAL_SIZE, "generated textures");
        bank
    }

    /// Real textures stored, the fallback excluded.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id of the texture called `name`.
    pub fn lookup(&self, name: &str) -> Option<TextureId> {
        self.slots
            .iter()
            .position(|t| t.name == name)
            .map(|i| i as TextureId)
    }

    pub fn get(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.slots.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Like [`TextureBank::get`], but unknown ids sample the fallback.
    #[inline]
    pub fn get_or_fallback(&self, id: TextureId) -> &Texture {
        self.slots
            .get(id as usize)
            .unwrap_or(&self.slots[NO_TEXTURE as usize])
    }

    /// Append `tex` under the next free id.
    pub fn push(&mut self, tex: Texture) -> Result<TextureId, TextureError> {
        if self.lookup(&tex.name).is_some() {
            return Err(TextureError::Duplicate(tex.name));
        }
        let id = TextureId::try_from(self.slots.len())
            .map_err(|_| TextureError::BadId(TextureId::MAX))?;
        self.slots.push(tex);
        Ok(id)
    }
}

/*======================================================================*/
/*                       Procedural texture set                         */
/*======================================================================*/
mod procedural {
    use super::*;

    const NAMES: [&str; 8] = [
        "RED_CROSS",
        "GREY_SLOPE",
        "YELLOW_SLOPE",
        "GREY_XOR",
        "GREEN_XOR",
        "RED_BRICK",
        "RED_FADE",
        "FLAT_GREY",
    ];

    /// Eight `size`×`size` textures in bank order.
    pub fn generate(size: usize) -> Vec<Texture> {
        let mut sets: Vec<Vec<Rgba>> = vec![vec![0; size * size]; NAMES.len()];

        for y in 0..size {
            for x in 0..size {
                let xor = ((x * 256 / size) ^ (y * 256 / size)) as u8;
                let yc = (y * 256 / size) as u8;
                let xy = (y * 128 / size + x * 128 / size) as u8;
                let i = y * size + x;

                let cross = x != y && x != size - y;
                let mortar = x % 16 == 0 || y % 16 == 0;

                sets[0][i] = if cross { rgb(254, 0, 0) } else { 0 };
                sets[1][i] = rgb(xy, xy, xy);
                sets[2][i] = rgb(xy, xy, 0);
                sets[3][i] = rgb(xor, xor, xor);
                sets[4][i] = rgb(0, xor, 0);
                sets[5][i] = if mortar { 0 } else { rgb(192, 0, 0) };
                sets[6][i] = rgb(yc, 0, 0);
                sets[7][i] = rgb(128, 128, 128);
            }
        }

        NAMES
            .iter()
            .zip(sets)
            .map(|(name, pixels)| Texture {
                name: (*name).to_string(),
                w: size,
                h: size,
                pixels,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(name: &str, color: Rgba) -> Texture {
        Texture::new(name, 2, 2, vec![color; 4]).unwrap()
    }

    #[test]
    fn ids_follow_push_order() {
        let mut bank = TextureBank::default();
        assert!(bank.is_empty());
        assert_eq!(bank.push(solid("stone", 0xAA0000)), Ok(1));
        assert_eq!(bank.push(solid("moss", 0x00AA00)), Ok(2));
        assert_eq!(bank.len(), 2);

        assert_eq!(bank.lookup("moss"), Some(2));
        assert_eq!(bank.lookup("lava"), None);
        assert_eq!(bank.get(1).unwrap().pixels()[3], 0xAA0000);
    }

    #[test]
    fn names_are_unique() {
        let mut bank = TextureBank::default();
        bank.push(solid("stone", 1)).unwrap();
        assert_eq!(
            bank.push(solid("stone", 2)),
            Err(TextureError::Duplicate("stone".into()))
        );
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn unknown_ids_fall_back() {
        let bank = TextureBank::default();
        assert_eq!(bank.get(3).unwrap_err(), TextureError::BadId(3));
        assert_eq!(bank.get_or_fallback(3).name, "FALLBACK");
        assert_eq!(bank.get_or_fallback(NO_TEXTURE).sample(0, 0), 0x00_FF00FF);
        assert_eq!(bank.get_or_fallback(NO_TEXTURE).sample(1, 0), 0);
    }

    #[test]
    fn sizes_must_be_powers_of_two() {
        assert_eq!(
            Texture::new("odd", 3, 4, vec![0; 12]).unwrap_err(),
            TextureError::NotPowerOfTwo { w: 3, h: 4 }
        );
        assert_eq!(
            Texture::new("short", 4, 4, vec![0; 15]).unwrap_err(),
            TextureError::PixelCount { w: 4, h: 4, got: 15 }
        );
    }

    #[test]
    fn sample_wraps_with_mask() {
        let tex = Texture::new("ramp", 2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(tex.sample(0, 0), 1);
        assert_eq!(tex.sample(1, 1), 4);
        assert_eq!(tex.sample(2, 0), 1);
        assert_eq!(tex.sample(3, 5), 4);
    }

    #[test]
    fn procedural_set_has_eight_textures() {
        let bank = TextureBank::procedural();
        assert_eq!(bank.len(), 8);
        assert_eq!(bank.lookup("RED_CROSS"), Some(1));
        assert_eq!(bank.lookup("FLAT_GREY"), Some(8));

        let grey = bank.get(8).unwrap();
        assert_eq!(grey.width(), PROCEDURAL_SIZE);
        assert!(grey.pixels().iter().all(|&p| p == 0x00_808080));

        // the red cross is black on its diagonal
        let cross = bank.get(1).unwrap();
        assert_eq!(cross.sample(5, 5), 0);
        assert_eq!(cross.sample(5, 6), 0x00_FE0000);

        // bricks have black mortar on every 16th row / column
        let brick = bank.get(6).unwrap();
        assert_eq!(brick.sample(16, 3), 0);
        assert_eq!(brick.sample(17, 3), 0x00_C00000);
    }
}
