/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// The fixed palette every itinerary is drawn with
pub mod palette {
    use super::*;

    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Brand purple: brand marks, markers, links
    pub const BRAND: Colour = Colour::RGB {
        r: 107.0 / 255.0,
        g: 70.0 / 255.0,
        b: 193.0 / 255.0,
    };
    /// Deep purple: table headers, day markers, call to action
    pub const BRAND_DARK: Colour = Colour::RGB {
        r: 63.0 / 255.0,
        g: 45.0 / 255.0,
        b: 123.0 / 255.0,
    };
    /// Body text
    pub const INK: Colour = Colour::RGB {
        r: 55.0 / 255.0,
        g: 65.0 / 255.0,
        b: 81.0 / 255.0,
    };
    /// Secondary text: taglines, footers, dates
    pub const MUTED: Colour = Colour::RGB {
        r: 100.0 / 255.0,
        g: 100.0 / 255.0,
        b: 100.0 / 255.0,
    };
    /// Panel backgrounds and shaded table rows
    pub const MIST: Colour = Colour::RGB {
        r: 248.0 / 255.0,
        g: 250.0 / 255.0,
        b: 252.0 / 255.0,
    };
    /// Rules and panel outlines
    pub const RULE: Colour = Colour::RGB {
        r: 220.0 / 255.0,
        g: 220.0 / 255.0,
        b: 220.0 / 255.0,
    };
    /// Timeline connectors
    pub const CONNECTOR: Colour = Colour::RGB {
        r: 200.0 / 255.0,
        g: 200.0 / 255.0,
        b: 200.0 / 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_map_to_unit_range() {
        assert_eq!(Colour::new_rgb_bytes(255, 0, 51), Colour::new_rgb(1.0, 0.0, 0.2));
        assert_eq!(Colour::from([107, 70, 193]), palette::BRAND);
    }
}
