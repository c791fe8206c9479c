//! Genome representation for the pixel-level genetic algorithm
//!
//! A genome is one candidate image: a `width x height` grid of pixels stored
//! row-major as packed RGB triples. Every channel is a `u8`, so any value the
//! operators write is a valid channel value and no range checks are needed.
//!
//! Crossover and mutation work directly on the packed bytes through
//! [`Genome::channels`] / [`Genome::channels_mut`]; `get`/`set` are the
//! coordinate-level API.
//!
//! Out-of-range coordinates are programming errors and panic.

use crate::types::Rgb;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

pub const CHANNELS_PER_PIXEL: usize = 3;

impl Genome {
    /// Genome with every channel set to zero
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb::default())
    }

    pub fn filled(width: u32, height: u32, pixel: Rgb) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * CHANNELS_PER_PIXEL);
        for _ in 0..pixels {
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b]);
        }
        Self { width, height, data }
    }

    /// Every channel of every pixel drawn independently and uniformly from `0..=255`
    pub fn random<R: Rng>(width: u32, height: u32, rng: &mut R) -> Self {
        let mut data = vec![0u8; width as usize * height as usize * CHANNELS_PER_PIXEL];
        rng.fill(data.as_mut_slice());
        Self { width, height, data }
    }

    /// Wrap packed row-major RGB bytes. Returns `None` if the length does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * CHANNELS_PER_PIXEL {
            return None;
        }
        Some(Self { width, height, data })
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        let i = self.index(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb) {
        let i = self.index(x, y);
        self.data[i] = pixel.r;
        self.data[i + 1] = pixel.g;
        self.data[i + 2] = pixel.b;
    }

    /// All channels, row-major, `[r, g, b, r, g, b, ...]`
    pub fn channels(&self) -> &[u8] {
        &self.data
    }

    pub fn channels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of range for {}x{} genome",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS_PER_PIXEL
    }
}
