pub const PLACEHOLDER_WIDTH: u32 = 100;
pub const PLACEHOLDER_HEIGHT: u32 = 150;

/// Solid RGB fill for a generated placeholder. Always rendered fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for FillColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FillColor {
    pub const WHITE: FillColor = FillColor {
        red: 255,
        green: 255,
        blue: 255,
    };

    /// Read a `rrggbb` query value.
    ///
    /// Anything that is not exactly six bytes long yields white. Within a
    /// six-byte value each pair is parsed on its own, and a pair that is not
    /// valid hex keeps its channel at 255.
    pub fn from_hex(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| raw.len() == 6) else {
            return Self::WHITE;
        };

        let channel = |range: std::ops::Range<usize>| {
            raw.get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .unwrap_or(255)
        };

        Self {
            red: channel(0..2),
            green: channel(2..4),
            blue: channel(4..6),
        }
    }

    pub fn rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 255]
    }
}
