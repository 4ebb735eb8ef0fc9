use crate::geometry::Rect;

pub const PLATFORM_COUNT: u32 = 4;
const TICKET_COUNTER_COUNT: u32 = 4;
const GRID_COLUMNS: u32 = 20;
const GRID_ROWS: u32 = 12;

pub const MAP_TITLE: &str = "Railway Station Layout";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapVariant {
    /// Grid and outer walls, used behind plain route navigation
    #[default]
    Simple,
    /// Full floor plan, used by the detail view and the AR preview
    Detailed,
}

impl MapVariant {
    /// Intrinsic canvas size in pixels; CSS scales the element to its container
    #[must_use]
    pub fn canvas_size(self) -> (u32, u32) {
        match self {
            MapVariant::Simple => (400, 240),
            MapVariant::Detailed => (500, 300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Platform(u32),
    Concourse,
    TicketCounter(u32),
    WaitingArea,
    Washroom,
    FoodCourt,
    MainEntrance,
    SideEntrance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub at: (f64, f64),
    pub font: &'static str,
}

impl TextLabel {
    fn new(text: impl Into<String>, at: (f64, f64), font: &'static str) -> Self {
        Self {
            text: text.into(),
            at,
            font,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub kind: RegionKind,
    pub rect: Rect,
}

/// Resolved geometry of a station floor plan for one surface size.
///
/// Every position is a fraction of the surface width or height, so the
/// same plan scales to any canvas without distortion.
#[derive(Debug, Clone, PartialEq)]
pub struct StationLayout {
    pub variant: MapVariant,
    pub width: f64,
    pub height: f64,
    /// Outer wall (simple) or station outline (detailed)
    pub outline: Rect,
    pub grid: Vec<((f64, f64), (f64, f64))>,
    pub regions: Vec<Region>,
    pub labels: Vec<TextLabel>,
    pub title: Option<TextLabel>,
    /// Anchor of the north arrow and its height in pixels
    pub north: Option<((f64, f64), f64)>,
}

const LABEL_FONT: &str = "bold 10px Arial";
const PLATFORM_FONT: &str = "bold 12px Arial";
const SMALL_FONT: &str = "bold 8px Arial";
const TITLE_FONT: &str = "bold 16px Arial";

impl StationLayout {
    #[must_use]
    pub fn compute(variant: MapVariant, width: f64, height: f64) -> Self {
        match variant {
            MapVariant::Simple => Self::simple(width, height),
            MapVariant::Detailed => Self::detailed(width, height),
        }
    }

    fn empty(variant: MapVariant, width: f64, height: f64, outline: Rect) -> Self {
        Self {
            variant,
            width,
            height,
            outline,
            grid: Vec::new(),
            regions: Vec::new(),
            labels: Vec::new(),
            title: None,
            north: None,
        }
    }

    fn simple(width: f64, height: f64) -> Self {
        let inset_x = width * 0.05;
        let inset_y = height * 0.08;
        let outline = Rect::new(inset_x, inset_y, width - 2.0 * inset_x, height - 2.0 * inset_y);
        let mut layout = Self::empty(MapVariant::Simple, width, height, outline);

        let column = width / f64::from(GRID_COLUMNS);
        let row = height / f64::from(GRID_ROWS);
        for i in 0..GRID_COLUMNS {
            let x = f64::from(i) * column;
            layout.grid.push(((x, 0.0), (x, height)));
        }
        for i in 0..GRID_ROWS {
            let y = f64::from(i) * row;
            layout.grid.push(((0.0, y), (width, y)));
        }

        layout
    }

    fn detailed(width: f64, height: f64) -> Self {
        let inset = width.min(height) * 0.03;
        let outline = Rect::new(inset, inset, width - 2.0 * inset, height - 2.0 * inset);
        let mut layout = Self::empty(MapVariant::Detailed, width, height, outline);

        let platform_height = height * 0.08;
        let platform_gap = height * 0.05;
        let platform_x = width * 0.15;
        for i in 0..PLATFORM_COUNT {
            let y = height * 0.2 + f64::from(i) * (platform_height + platform_gap);
            layout.push(RegionKind::Platform(i + 1), Rect::new(platform_x, y, width * 0.7, platform_height));
            layout.labels.push(TextLabel::new(
                format!("P{}", i + 1),
                (width * 0.075, y + platform_height / 2.0),
                PLATFORM_FONT,
            ));
        }

        layout.push(RegionKind::Concourse, Rect::new(width * 0.1, height * 0.7, width * 0.8, height * 0.2));

        let counter_width = width * 0.1;
        let counter_gap = width * 0.03;
        let counter_y = height * 0.8;
        let counter_height = height * 0.05;
        for i in 0..TICKET_COUNTER_COUNT {
            let x = width * 0.2 + f64::from(i) * (counter_width + counter_gap);
            layout.push(RegionKind::TicketCounter(i + 1), Rect::new(x, counter_y, counter_width, counter_height));
        }
        layout.labels.push(TextLabel::new(
            "Ticket Counters",
            (width * 0.2 + (counter_width + counter_gap) * 1.5, counter_y + counter_height + height * 0.05),
            PLATFORM_FONT,
        ));

        layout.push(RegionKind::WaitingArea, Rect::new(width * 0.65, height * 0.75, width * 0.2, height * 0.1));
        layout.labels.push(TextLabel::new("Waiting Area", (width * 0.75, height * 0.8), LABEL_FONT));

        for (y, text) in [(0.3, "M"), (0.4, "W")] {
            layout.push(RegionKind::Washroom, Rect::new(width * 0.85, height * y, width * 0.08, height * 0.08));
            layout.labels.push(TextLabel::new(text, (width * 0.89, height * (y + 0.04)), SMALL_FONT));
        }

        layout.push(RegionKind::FoodCourt, Rect::new(width * 0.15, height * 0.6, width * 0.15, height * 0.08));
        layout.labels.push(TextLabel::new("Food Court", (width * 0.225, height * 0.64), LABEL_FONT));

        layout.push(RegionKind::MainEntrance, Rect::new(width * 0.4, height * 0.9, width * 0.2, height * 0.1));
        layout.push(RegionKind::SideEntrance, Rect::new(width * 0.9, height * 0.6, width * 0.1, height * 0.1));
        layout.labels.push(TextLabel::new("Main Entrance", (width * 0.5, height * 0.95), LABEL_FONT));
        layout.labels.push(TextLabel::new("Side", (width * 0.95, height * 0.65), LABEL_FONT));

        layout.title = Some(TextLabel::new(MAP_TITLE, (width / 2.0, height * 0.08), TITLE_FONT));
        layout.north = Some(((width * 0.9, height * 0.1), height * 0.035));

        layout
    }

    fn push(&mut self, kind: RegionKind, rect: Rect) {
        self.regions.push(Region { kind, rect });
    }

    pub fn regions_of(&self, kind: RegionKind) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |r| r.kind == kind)
    }

    #[must_use]
    pub fn platform_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|r| matches!(r.kind, RegionKind::Platform(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [(f64, f64); 5] = [(500.0, 300.0), (400.0, 240.0), (1.0, 1.0), (1920.0, 200.0), (37.5, 911.0)];

    fn assert_rect_close(actual: Rect, expected: Rect) {
        let pairs = [
            (actual.x, expected.x),
            (actual.y, expected.y),
            (actual.width, expected.width),
            (actual.height, expected.height),
        ];
        for (a, e) in pairs {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    fn point_within(layout: &StationLayout, (x, y): (f64, f64)) -> bool {
        (0.0..=layout.width).contains(&x) && (0.0..=layout.height).contains(&y)
    }

    #[test]
    fn test_detailed_regions_within_bounds() {
        for (w, h) in SIZES {
            let layout = StationLayout::compute(MapVariant::Detailed, w, h);
            assert!(layout.outline.within(w, h));
            for region in &layout.regions {
                assert!(region.rect.within(w, h), "{:?} escapes {w}x{h}", region.kind);
            }
            for label in &layout.labels {
                assert!(point_within(&layout, label.at), "{} escapes {w}x{h}", label.text);
            }
        }
    }

    #[test]
    fn test_simple_within_bounds() {
        for (w, h) in SIZES {
            let layout = StationLayout::compute(MapVariant::Simple, w, h);
            assert!(layout.outline.within(w, h));
            assert!(layout.regions.is_empty());
            for (a, b) in &layout.grid {
                assert!(point_within(&layout, *a) && point_within(&layout, *b));
            }
        }
    }

    #[test]
    fn test_detailed_contents() {
        let layout = StationLayout::compute(MapVariant::Detailed, 500.0, 300.0);
        assert_eq!(layout.platform_count(), PLATFORM_COUNT as usize);
        assert_eq!(layout.regions_of(RegionKind::Washroom).count(), 2);
        assert_eq!(layout.regions_of(RegionKind::Concourse).count(), 1);
        assert_eq!(layout.regions_of(RegionKind::MainEntrance).count(), 1);
        assert_eq!(layout.title.as_ref().map(|t| t.text.as_str()), Some(MAP_TITLE));
        assert!(layout.north.is_some());

        let platform = layout.regions_of(RegionKind::Platform(1)).next().expect("platform 1");
        assert_rect_close(platform.rect, Rect::new(75.0, 60.0, 350.0, 24.0));
    }

    #[test]
    fn test_layout_scales_proportionally() {
        let small = StationLayout::compute(MapVariant::Detailed, 500.0, 300.0);
        let large = StationLayout::compute(MapVariant::Detailed, 1000.0, 600.0);
        for (a, b) in small.regions.iter().zip(&large.regions) {
            assert_eq!(a.kind, b.kind);
            assert!((a.rect.x * 2.0 - b.rect.x).abs() < 1e-9);
            assert!((a.rect.height * 2.0 - b.rect.height).abs() < 1e-9);
        }
    }

    #[test]
    fn test_simple_grid_lines() {
        let layout = StationLayout::compute(MapVariant::Simple, 400.0, 240.0);
        assert_eq!(layout.grid.len(), (GRID_COLUMNS + GRID_ROWS) as usize);
        assert_rect_close(layout.outline, Rect::new(20.0, 19.2, 360.0, 201.6));
    }
}
