//! Core types for gui-screen.
//!
//! Geometry, colours and capability flags shared by the control graph,
//! the loader and the layout pass.

use serde::Deserialize;

// =============================================================================
// Colour
// =============================================================================

/// A colour as written in documents.
///
/// Alpha 0 means "no colour of its own": renderers use the terminal's
/// current foreground or background instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Whatever the terminal draws by default.
    pub const TERMINAL_DEFAULT: Self = Self::new(0, 0, 0, 0);

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    pub const fn is_terminal_default(&self) -> bool {
        self.a == 0
    }

    /// `RGB`, `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        match digits.len() {
            3 => {
                // each digit doubles: "f80" is "ff8800"
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Colour keyword or hex string, case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        let keyword = input.trim().to_ascii_lowercase();
        let color = match keyword.as_str() {
            "" => return None,
            "default" | "inherit" | "transparent" => Self::TERMINAL_DEFAULT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" => Self::CYAN,
            "magenta" => Self::MAGENTA,
            "gray" | "grey" => Self::GRAY,
            hex => return Self::from_hex(hex),
        };
        Some(color)
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color '{value}'"))
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// A point in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
///
/// No normalization happens here: negative or non-finite extents are stored
/// as given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink the rect by a thickness on every side.
    pub fn deflate(&self, thickness: Thickness) -> Rect {
        Rect {
            x: self.x + thickness.left,
            y: self.y + thickness.top,
            width: self.width - thickness.horizontal(),
            height: self.height - thickness.vertical(),
        }
    }
}

// =============================================================================
// Thickness - margins and padding
// =============================================================================

/// Per-side spacing used for margins and padding.
///
/// Deserializes from a number (all sides), a string of one, two ("h v") or
/// four ("l t r b") numbers, or an object with `Left`/`Top`/`Right`/`Bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same spacing on every side.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Parse "all", "h v" or "l t r b".
    pub fn parse(input: &str) -> Option<Self> {
        let values = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f32>().ok())
            .collect::<Option<Vec<_>>>()?;

        match values.as_slice() {
            [all] => Some(Self::uniform(*all)),
            [h, v] => Some(Self::new(*h, *v, *h, *v)),
            [l, t, r, b] => Some(Self::new(*l, *t, *r, *b)),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Thickness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Sides {
            #[serde(default)]
            left: f32,
            #[serde(default)]
            top: f32,
            #[serde(default)]
            right: f32,
            #[serde(default)]
            bottom: f32,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Uniform(f32),
            Text(String),
            Sides(Sides),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Uniform(value) => Ok(Self::uniform(value)),
            Repr::Text(text) => Self::parse(&text)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid thickness '{text}'"))),
            Repr::Sides(sides) => Ok(Self::new(sides.left, sides.top, sides.right, sides.bottom)),
        }
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Horizontal placement of a control inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HorizontalAlignment {
    Left,
    #[serde(alias = "Center")]
    Centre,
    Right,
    #[default]
    Stretch,
}

/// Vertical placement of a control inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum VerticalAlignment {
    Top,
    #[serde(alias = "Center")]
    Centre,
    Bottom,
    #[default]
    Stretch,
}

// =============================================================================
// Capabilities (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// What a control type can do.
    ///
    /// Combine with bitwise OR: `Capabilities::LAYOUT | Capabilities::DRAW`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Capabilities: u8 {
        /// Has a bounding rectangle assigned by placement.
        const LAYOUT = 1 << 0;
        /// Produces visual output.
        const DRAW = 1 << 1;
        /// Owns an ordered collection of child controls.
        const CONTAIN_CHILDREN = 1 << 2;
    }
}

impl Capabilities {
    /// Capabilities of a leaf control.
    pub const LEAF: Self = Self::LAYOUT.union(Self::DRAW);
    /// Capabilities of a container control.
    pub const CONTAINER: Self = Self::LEAF.union(Self::CONTAIN_CHILDREN);
}
