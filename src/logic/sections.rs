//! Page Sections
//!
//! The mutually-exclusive top-level views and the router that tracks
//! which one is active. Activating an info section also names the
//! background resource to load; the router itself performs no I/O.

/// One top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Predict,
    DiseaseInfo,
    Developers,
    Admin,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Predict,
        Section::DiseaseInfo,
        Section::Developers,
        Section::Admin,
    ];

    /// Stable section identifier
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Predict => "predict",
            Section::DiseaseInfo => "disease-info",
            Section::Developers => "developers",
            Section::Admin => "admin",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Predict => "Risk Assessment",
            Section::DiseaseInfo => "Heart Disease Information",
            Section::Developers => "Development Team",
            Section::Admin => "Admin",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Info endpoint slug loaded fire-and-forget when the section is
    /// shown. Only the two informational sections have one.
    pub fn info_slug(&self) -> Option<&'static str> {
        match self {
            Section::DiseaseInfo => Some("disease-info"),
            Section::Developers => Some("developers"),
            _ => None,
        }
    }
}

/// Tracks the active section
#[derive(Debug)]
pub struct SectionRouter {
    active: Section,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self { active: Section::Home }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Deactivate the current section and activate `section`. Returns
    /// the info slug to load in the background, if the new section has
    /// one; exactly one load per activation.
    pub fn activate(&mut self, section: Section) -> Option<&'static str> {
        self.active = section;
        section.info_slug()
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}
