//! Candy handed out on a sale.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Red,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Stale,
    Fresh,
    Premium,
}

impl Colour {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];
}

impl Quality {
    pub const ALL: [Self; 3] = [Self::Stale, Self::Fresh, Self::Premium];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candy {
    pub colour: Colour,
    pub quality: Quality,
}

impl Candy {
    /// Draw colour and quality independently, each uniform over its three
    /// buckets.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let colour = Colour::ALL[rng.gen_range(0..Colour::ALL.len())];
        let quality = Quality::ALL[rng.gen_range(0..Quality::ALL.len())];
        Self { colour, quality }
    }
}

impl fmt::Display for Candy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quality = match self.quality {
            Quality::Stale => "stale",
            Quality::Fresh => "fresh",
            Quality::Premium => "premium",
        };
        let colour = match self.colour {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
        };
        write!(f, "{quality} {colour} candy")
    }
}
