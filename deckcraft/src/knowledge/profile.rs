//! Geographic profiles and compositional bands

use std::fmt;

use super::KnowledgeError;

/// One of the five vertical zones of a deck composition, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Top,
    UpperMiddle,
    LowerMiddle,
    Foreground,
    Details,
}

impl Band {
    /// All bands in composition order
    pub const ALL: [Band; 5] = [
        Band::Top,
        Band::UpperMiddle,
        Band::LowerMiddle,
        Band::Foreground,
        Band::Details,
    ];

    /// Label used for the band's line in a prompt
    pub fn label(&self) -> &'static str {
        match self {
            Band::Top => "Top Section",
            Band::UpperMiddle => "Upper-Middle Section",
            Band::LowerMiddle => "Lower-Middle Section",
            Band::Foreground => "Foreground/Base Section",
            Band::Details => "Subtle Background/Details",
        }
    }

    fn index(&self) -> usize {
        match self {
            Band::Top => 0,
            Band::UpperMiddle => 1,
            Band::LowerMiddle => 2,
            Band::Foreground => 3,
            Band::Details => 4,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Candidate phrases for every band of a place, plus its lettering style
///
/// Every band holds at least one phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeographicProfile {
    bands: [Vec<String>; 5],
    typography: Option<String>,
}

impl GeographicProfile {
    /// Build a profile, rejecting empty bands
    ///
    /// Blank phrases are dropped before the emptiness check.
    pub fn new(
        top: Vec<String>,
        upper_middle: Vec<String>,
        lower_middle: Vec<String>,
        foreground: Vec<String>,
        details: Vec<String>,
        typography: Option<String>,
    ) -> Result<Self, KnowledgeError> {
        let bands = [top, upper_middle, lower_middle, foreground, details].map(|phrases| {
            phrases
                .into_iter()
                .filter(|p| !p.trim().is_empty())
                .collect::<Vec<_>>()
        });

        for band in Band::ALL {
            if bands[band.index()].is_empty() {
                return Err(KnowledgeError::EmptyBand(band));
            }
        }

        let typography = typography.filter(|t| !t.trim().is_empty());
        Ok(Self { bands, typography })
    }

    /// Built-in data is known to be non-empty
    pub(super) fn from_static(
        bands: [&[&str]; 5],
        typography: Option<&str>,
    ) -> Self {
        debug_assert!(bands.iter().all(|b| !b.is_empty()));
        Self {
            bands: bands.map(|phrases| phrases.iter().map(|p| p.to_string()).collect()),
            typography: typography.map(str::to_string),
        }
    }

    /// Candidate phrases for a band, never empty
    pub fn candidates(&self, band: Band) -> &[String] {
        &self.bands[band.index()]
    }

    /// Lettering style, if the profile defines one
    pub fn typography(&self) -> Option<&str> {
        self.typography.as_deref()
    }
}
