//! Pixel - a single RGB picture element
//!
//! A pixel is an ordered triple of unsigned channels. Values are
//! conventionally in `[0, 255]`, but nothing here clamps them: the
//! transforms only need min/max/sum/average semantics.

/// Number of channels in a pixel.
pub const CHANNELS: usize = 3;

/// Red channel index
pub const RED: usize = 0;
/// Green channel index
pub const GREEN: usize = 1;
/// Blue channel index
pub const BLUE: usize = 2;

/// One picture element: `[red, green, blue]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel(pub [u32; CHANNELS]);

impl Pixel {
    /// The black pixel `(0, 0, 0)`.
    pub const BLACK: Pixel = Pixel([0, 0, 0]);

    /// Create a pixel from its red, green and blue channels.
    #[inline]
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Pixel([r, g, b])
    }

    /// Create a pixel with every channel set to `v`.
    #[inline]
    pub const fn splat(v: u32) -> Self {
        Pixel([v, v, v])
    }

    #[inline]
    pub fn red(self) -> u32 {
        self.0[RED]
    }

    #[inline]
    pub fn green(self) -> u32 {
        self.0[GREEN]
    }

    #[inline]
    pub fn blue(self) -> u32 {
        self.0[BLUE]
    }

    /// Channel values in order.
    #[inline]
    pub fn channels(&self) -> &[u32; CHANNELS] {
        &self.0
    }

    /// Mutable channel values in order.
    #[inline]
    pub fn channels_mut(&mut self) -> &mut [u32; CHANNELS] {
        &mut self.0
    }

    /// Largest channel value.
    pub fn max_channel(self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Smallest channel value.
    pub fn min_channel(self) -> u32 {
        self.0.iter().copied().min().unwrap_or(0)
    }

    /// Sum of all channels, widened so it cannot overflow.
    pub fn sum(self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    /// Channels narrowed to bytes, or `None` if any exceeds 255.
    pub fn to_rgb8(self) -> Option<[u8; CHANNELS]> {
        let [r, g, b] = self.0;
        Some([
            u8::try_from(r).ok()?,
            u8::try_from(g).ok()?,
            u8::try_from(b).ok()?,
        ])
    }
}

impl From<[u32; CHANNELS]> for Pixel {
    fn from(channels: [u32; CHANNELS]) -> Self {
        Pixel(channels)
    }
}

impl From<Pixel> for [u32; CHANNELS] {
    fn from(pixel: Pixel) -> Self {
        pixel.0
    }
}

impl From<[u8; CHANNELS]> for Pixel {
    fn from([r, g, b]: [u8; CHANNELS]) -> Self {
        Pixel::new(u32::from(r), u32::from(g), u32::from(b))
    }
}
