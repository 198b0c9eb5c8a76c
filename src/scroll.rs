//! Scroll tracking: which page section is active, plus the small values derived
//! from the scroll offset (navigation shading, hero parallax).

/// How far below the top of the viewport the active-section probe sits.
pub const PROBE_OFFSET: f64 = 100.0;
/// Scroll offset past which the navigation bar gets its solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const PARALLAX_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Experiences,
    Skills,
    Contact,
}

impl SectionId {
    /// Declaration order, which is also the order sections are probed in.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Experiences,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// The element id of the section on the page.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Experiences => "experiences",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Experiences => "Work & Internship Experience",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Vertical span of a section on the page, `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub section: SectionId,
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    probe_offset: f64,
    active: Option<SectionId>,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(PROBE_OFFSET)
    }
}

impl ScrollSpy {
    pub fn new(probe_offset: f64) -> Self {
        Self {
            probe_offset,
            active: None,
        }
    }

    /// Marks the first extent containing the probe as active.
    ///
    /// Extents are checked in the order given. When none contains the probe
    /// the previous section stays active.
    pub fn update<I>(&mut self, scroll_y: f64, extents: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = Extent>,
    {
        let probe = scroll_y + self.probe_offset;
        if let Some(hit) = extents.into_iter().find(|e| e.contains(probe)) {
            self.active = Some(hit.section);
        }
        self.active
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}
