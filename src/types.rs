use serde::{Deserialize, Serialize};

/// One pixel: three independent 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(px: Rgb) -> Self {
        (px.r, px.g, px.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Offset of this channel inside a packed RGB triple
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Aggregate fitness of one generation's population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub generation: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub best_index: usize,
}

impl PopulationStats {
    /// Summarize a score vector. Returns `None` for an empty population.
    pub fn from_scores(generation: usize, scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mut best_index = 0;
        let mut max = f64::MIN;
        let mut min = f64::MAX;
        let mut total = 0.0;

        for (i, &score) in scores.iter().enumerate() {
            total += score;
            if score > max {
                max = score;
                best_index = i;
            }
            if score < min {
                min = score;
            }
        }

        Some(Self {
            generation,
            mean: total / scores.len() as f64,
            max,
            min,
            best_index,
        })
    }
}
