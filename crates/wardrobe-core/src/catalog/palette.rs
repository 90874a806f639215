//! Color affinity rules and seasonal color sets.

use super::model::Color;

/// Colors that read as winter-appropriate.
pub const WINTER_COLORS: [Color; 5] = [
    Color::Black,
    Color::Gray,
    Color::Blue,
    Color::Brown,
    Color::White,
];

/// Colors that read as summer-appropriate.
pub const SUMMER_COLORS: [Color; 6] = [
    Color::White,
    Color::Yellow,
    Color::Orange,
    Color::Pink,
    Color::Green,
    Color::Blue,
];

/// Colors jeans are paired in when matched against a summer top.
pub const SUMMER_JEANS_COLORS: [Color; 3] = [Color::Blue, Color::White, Color::Gray];

/// Directed "goes well with" list for a color.
///
/// The table is not symmetric (e.g. purple lists pink, pink lists purple,
/// but red lists neither). Use [`colors_match`] for pairing decisions.
pub fn affinity(color: Color) -> &'static [Color] {
    use Color::*;

    match color {
        White => &[Black, Blue, Red, Green, Yellow, Orange, Purple, Pink, Gray, Brown],
        Black => &[White, Red, Blue, Green, Yellow, Orange, Purple, Pink, Gray, Brown],
        Blue => &[White, Black, Gray, Orange, Yellow, Red, Brown],
        Red => &[White, Black, Blue, Gray, Yellow, Orange],
        Green => &[White, Black, Brown, Gray, Yellow, Orange],
        Yellow => &[White, Black, Blue, Gray, Green, Orange, Purple],
        Orange => &[White, Black, Blue, Gray, Yellow, Green, Brown],
        Purple => &[White, Black, Gray, Yellow, Pink],
        Pink => &[White, Black, Gray, Purple, Red],
        Gray => &[White, Black, Blue, Red, Green, Yellow, Orange, Purple, Pink, Brown],
        Brown => &[White, Black, Green, Orange, Gray, Blue],
    }
}

/// Two colors match when either side's affinity list names the other.
pub fn colors_match(a: Color, b: Color) -> bool {
    affinity(a).contains(&b) || affinity(b).contains(&a)
}

pub fn is_winter_color(color: Color) -> bool {
    WINTER_COLORS.contains(&color)
}

pub fn is_summer_color(color: Color) -> bool {
    SUMMER_COLORS.contains(&color)
}
