use super::Rgb;

/// The built-in color tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    /// 16 colors running from deep blue through green and yellow to dark red.
    #[default]
    Colors16,
    /// 256-step blue-cyan-yellow-red ramp.
    Colors256,
}

impl Palette {
    pub fn colors(self) -> &'static [Rgb] {
        match self {
            Palette::Colors16 => &COLORS_16,
            Palette::Colors256 => &COLORS_256,
        }
    }

    pub fn len(self) -> usize {
        self.colors().len()
    }

    pub fn is_empty(self) -> bool {
        self.colors().is_empty()
    }
}

pub const COLORS_16: [Rgb; 16] = [
    Rgb::new(0, 0, 143),
    Rgb::new(0, 0, 223),
    Rgb::new(0, 48, 255),
    Rgb::new(0, 112, 255),
    Rgb::new(0, 175, 255),
    Rgb::new(0, 239, 255),
    Rgb::new(48, 255, 207),
    Rgb::new(112, 255, 143),
    Rgb::new(175, 255, 80),
    Rgb::new(239, 255, 16),
    Rgb::new(255, 207, 0),
    Rgb::new(255, 143, 0),
    Rgb::new(255, 80, 0),
    Rgb::new(255, 16, 0),
    Rgb::new(207, 0, 0),
    Rgb::new(143, 0, 0),
];

pub const COLORS_256: [Rgb; 256] = ramp();

const fn ramp() -> [Rgb; 256] {
    let mut table = [Rgb::new(0, 0, 0); 256];
    let mut i = 0;
    while i < 256 {
        // each channel is a tent of half-width 1.5 quarters over the ramp
        let x = 4 * i as i32;
        table[i] = Rgb::new(tent(x - 765), tent(x - 510), tent(x - 255));
        i += 1;
    }
    table
}

const fn tent(offset: i32) -> u8 {
    let level = 382 - offset.abs();
    if level < 0 {
        0
    } else if level > 255 {
        255
    } else {
        level as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sizes() {
        assert_eq!(Palette::Colors16.len(), 16);
        assert_eq!(Palette::Colors256.len(), 256);
        assert!(!Palette::default().is_empty());
    }

    #[test]
    fn test_ramp_runs_blue_to_red() {
        assert_eq!(COLORS_256[0], Rgb::new(0, 0, 127));
        assert_eq!(COLORS_256[255], Rgb::new(127, 0, 0));
        // middle of the ramp is green dominated
        let mid = COLORS_256[128];
        assert_eq!(mid.g, 255);
        assert!(mid.r > 100 && mid.b > 100);
    }
}
