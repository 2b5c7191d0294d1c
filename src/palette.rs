//! Fixed color and icon assignments for trend directions, plus the group
//! palette used by combined charts.

use crate::history::TrendDirection;

/// Colors applied to one rendered series. CSS color strings, consumed as-is
/// by the charting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet {
    pub border: &'static str,
    pub point: &'static str,
    pub trend_line: &'static str,
    pub text: &'static str,
    pub fill: &'static str,
}

const STRONG_GROWTH_COLORS: ColorSet = ColorSet {
    border: "#198754",
    point: "#198754",
    trend_line: "rgba(25, 135, 84, 0.6)",
    text: "#146c43",
    fill: "rgba(25, 135, 84, 0.1)",
};

const GROWTH_COLORS: ColorSet = ColorSet {
    border: "#20c997",
    point: "#20c997",
    trend_line: "rgba(32, 201, 151, 0.6)",
    text: "#0f5132",
    fill: "rgba(32, 201, 151, 0.1)",
};

const STABLE_COLORS: ColorSet = ColorSet {
    border: "#0d6efd",
    point: "#0d6efd",
    trend_line: "rgba(13, 110, 253, 0.6)",
    text: "#084298",
    fill: "rgba(13, 110, 253, 0.1)",
};

const DECLINE_COLORS: ColorSet = ColorSet {
    border: "#fd7e14",
    point: "#fd7e14",
    trend_line: "rgba(253, 126, 20, 0.6)",
    text: "#984c0c",
    fill: "rgba(253, 126, 20, 0.1)",
};

const STRONG_DECLINE_COLORS: ColorSet = ColorSet {
    border: "#dc3545",
    point: "#dc3545",
    trend_line: "rgba(220, 53, 69, 0.6)",
    text: "#b02a37",
    fill: "rgba(220, 53, 69, 0.1)",
};

/// Color set for a trend direction. Total over the enum; unrecognized
/// direction strings already collapse to `Stable` at parse time.
pub fn colors_for(direction: TrendDirection) -> &'static ColorSet {
    match direction {
        TrendDirection::StrongGrowth => &STRONG_GROWTH_COLORS,
        TrendDirection::Growth => &GROWTH_COLORS,
        TrendDirection::Stable => &STABLE_COLORS,
        TrendDirection::Decline => &DECLINE_COLORS,
        TrendDirection::StrongDecline => &STRONG_DECLINE_COLORS,
    }
}

/// Arrow glyph for a trend direction.
pub fn icon_for(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::StrongGrowth => "\u{2191}\u{2191}",
        TrendDirection::Growth => "\u{2191}",
        TrendDirection::Stable => "\u{2192}",
        TrendDirection::Decline => "\u{2193}",
        TrendDirection::StrongDecline => "\u{2193}\u{2193}",
    }
}

// Fixed palette for combined charts, cycled by group index.
const GROUP_PALETTE: [&str; 7] = [
    "#0dcaf0", // cyan
    "#d63384", // magenta
    "#198754", // green
    "#ffc107", // yellow
    "#0d6efd", // blue
    "#dc3545", // red
    "#6f42c1", // purple
];

/// Border color for the group at `index`, cycling through the fixed palette.
pub fn group_color(index: usize) -> &'static str {
    GROUP_PALETTE[index % GROUP_PALETTE.len()]
}

/// Line width for a series: strong trends draw heavier.
pub fn border_width(direction: TrendDirection) -> u32 {
    if direction.is_strong() {
        3
    } else {
        2
    }
}
