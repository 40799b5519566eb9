use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

pub const DEFAULT_PALETTE_SIZE: usize = 30;

/// Randomly generated `#rrggbb` colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Without a seed the palette differs on every call.
    pub fn generate(size: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let colors = (0..size.max(1))
            .map(|_| format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32)))
            .collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

/// Session cache of commodity colours, handed out in order of first sighting.
#[derive(Debug, Clone)]
pub struct ColorAssignments {
    palette: Palette,
    assigned: HashMap<String, String>,
}

impl ColorAssignments {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    pub fn color_for(&mut self, commodity: &str) -> String {
        if let Some(color) = self.assigned.get(commodity) {
            return color.clone();
        }
        let color = self.palette.get(self.assigned.len()).to_string();
        self.assigned.insert(commodity.to_string(), color.clone());
        color
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }
}
