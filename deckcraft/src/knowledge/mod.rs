//! Place knowledge base
//!
//! Maps normalized place names to [`GeographicProfile`]s. Lookup is
//! first-substring-match in key order, so a subject naming two places
//! resolves to whichever key comes first. Subjects with no named match fall
//! back to a generic wilderness profile when they carry a region or landform
//! marker, and to nothing otherwise.
//!
//! A knowledge base is immutable once built.

mod builtin;
mod profile;

use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

pub use profile::{Band, GeographicProfile};

/// Words that mark a subject as being in the covered region
pub const REGION_MARKERS: &[&str] = &["colorado", "co"];

/// Words that mark a subject as mountain terrain
pub const LANDFORM_MARKERS: &[&str] = &["mountain", "peak", "summit", "ridge"];

/// Errors building a knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeError {
    #[error("profile band '{0}' has no phrases")]
    EmptyBand(Band),

    #[error("place name is blank")]
    BlankKey,

    #[error("place '{0}' is already defined")]
    DuplicateKey(String),
}

/// Outcome of resolving a subject against the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'kb> {
    /// A named place matched
    Named {
        key: &'kb str,
        profile: &'kb GeographicProfile,
    },
    /// No named place, but a region or landform marker was present
    Generic(&'kb GeographicProfile),
    /// Nothing to compose from
    Unmatched,
}

impl<'kb> Resolution<'kb> {
    /// The resolved profile, if any
    pub fn profile(&self) -> Option<&'kb GeographicProfile> {
        match self {
            Resolution::Named { profile, .. } => Some(profile),
            Resolution::Generic(profile) => Some(profile),
            Resolution::Unmatched => None,
        }
    }
}

/// Ordered, read-only place knowledge base
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    places: Vec<(String, GeographicProfile)>,
    fallback: GeographicProfile,
}

impl KnowledgeBase {
    /// The built-in places, shared process-wide
    pub fn builtin() -> &'static KnowledgeBase {
        static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();
        BUILTIN.get_or_init(|| KnowledgeBase {
            places: builtin::places()
                .into_iter()
                .map(|(key, profile)| (key.to_string(), profile))
                .collect(),
            fallback: builtin::wilderness(),
        })
    }

    /// Built-in places followed by `extra`, in the given order
    ///
    /// Keys are trimmed and lower-cased. Extra places are appended, so they
    /// only win for subjects that mention no built-in place.
    pub fn with_places<I>(extra: I) -> Result<Self, KnowledgeError>
    where
        I: IntoIterator<Item = (String, GeographicProfile)>,
    {
        let mut base = Self::builtin().clone();
        for (name, profile) in extra {
            let key = normalize(&name);
            if key.is_empty() {
                return Err(KnowledgeError::BlankKey);
            }
            if base.places.iter().any(|(k, _)| *k == key) {
                return Err(KnowledgeError::DuplicateKey(key));
            }
            base.places.push((key, profile));
        }
        Ok(base)
    }

    /// Keys in lookup order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.places.iter().map(|(k, _)| k.as_str())
    }

    /// Profile for an exact (normalized) key
    pub fn get(&self, key: &str) -> Option<&GeographicProfile> {
        let key = normalize(key);
        self.places
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, profile)| profile)
    }

    /// Profile used for marker-only matches
    pub fn fallback(&self) -> &GeographicProfile {
        &self.fallback
    }

    /// Resolve a subject to a profile
    pub fn resolve(&self, subject: &str) -> Resolution<'_> {
        let lowered = subject.to_lowercase();

        if let Some((key, profile)) = self
            .places
            .iter()
            .find(|(k, _)| lowered.contains(k.as_str()))
        {
            debug!("Subject '{}' matched place '{}'", subject, key);
            return Resolution::Named {
                key: key.as_str(),
                profile,
            };
        }

        if has_marker(&lowered) {
            debug!("Subject '{}' matched a generic marker", subject);
            return Resolution::Generic(&self.fallback);
        }

        debug!("Subject '{}' matched nothing", subject);
        Resolution::Unmatched
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whole-word test for region or landform markers
fn has_marker(lowered: &str) -> bool {
    lowered
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|word| REGION_MARKERS.contains(&word) || LANDFORM_MARKERS.contains(&word))
}
