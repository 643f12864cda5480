use web_sys::Document;

/// Anchored sections of the landing page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Features,
    Technology,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Features,
        Section::Technology,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::Technology => "technology",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// Distance from the viewport top, in CSS pixels, that a section has to
/// cover to count as the one being read.
pub const ACTIVE_OFFSET_PX: f64 = 100.0;

/// Minimum gap between two layout reads while scrolling.
pub const SCROLL_THROTTLE_MS: u32 = 100;

/// Vertical extent of an element relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

/// First section whose box covers `offset`. Sections missing from the page
/// (`None` bounds) are skipped.
pub fn active_section<I>(sections: I, offset: f64) -> Option<Section>
where
    I: IntoIterator<Item = (Section, Option<SectionBounds>)>,
{
    sections
        .into_iter()
        .find(|(_, bounds)| bounds.map_or(false, |b| b.straddles(offset)))
        .map(|(section, _)| section)
}

/// Reads the current bounding boxes of every section from the DOM.
pub fn measure_sections(
    document: &Document,
) -> impl Iterator<Item = (Section, Option<SectionBounds>)> + '_ {
    Section::ALL.into_iter().map(move |section| {
        let bounds = document.get_element_by_id(section.id()).map(|element| {
            let rect = element.get_bounding_client_rect();
            SectionBounds {
                top: rect.top(),
                bottom: rect.bottom(),
            }
        });
        (section, bounds)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(boxes: [(f64, f64); 5]) -> Vec<(Section, Option<SectionBounds>)> {
        Section::ALL
            .into_iter()
            .zip(boxes)
            .map(|(section, (top, bottom))| (section, Some(SectionBounds { top, bottom })))
            .collect()
    }

    #[test]
    fn picks_section_covering_offset() {
        let sections = layout([
            (-900.0, -200.0),
            (-200.0, 400.0),
            (400.0, 1000.0),
            (1000.0, 1600.0),
            (1600.0, 2000.0),
        ]);
        assert_eq!(active_section(sections, ACTIVE_OFFSET_PX), Some(Section::Features));
    }

    #[test]
    fn boundary_goes_to_first_match() {
        // Home ends exactly where Features starts.
        let sections = layout([
            (0.0, 100.0),
            (100.0, 700.0),
            (700.0, 1200.0),
            (1200.0, 1800.0),
            (1800.0, 2400.0),
        ]);
        assert_eq!(active_section(sections, ACTIVE_OFFSET_PX), Some(Section::Home));
    }

    #[test]
    fn none_when_nothing_covers_offset() {
        let sections = layout([
            (200.0, 300.0),
            (300.0, 400.0),
            (400.0, 500.0),
            (500.0, 600.0),
            (600.0, 700.0),
        ]);
        assert_eq!(active_section(sections, ACTIVE_OFFSET_PX), None);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let sections = vec![
            (Section::Home, None),
            (Section::Features, None),
            (Section::Technology, Some(SectionBounds { top: 50.0, bottom: 500.0 })),
        ];
        assert_eq!(active_section(sections, ACTIVE_OFFSET_PX), Some(Section::Technology));
    }

    #[test]
    fn anchors_match_ids() {
        assert_eq!(Section::Testimonials.anchor(), "#testimonials");
        assert_eq!(Section::ALL.map(Section::id), ["home", "features", "technology", "testimonials", "contact"]);
    }
}
