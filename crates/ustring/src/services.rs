//! Optional collaborator capabilities: collation and normalization.
//!
//! The host environment resolves these once and installs them in a
//! process-wide [`ServiceRegistry`]; absence of either service is a normal,
//! handled condition, not an error. Comparison falls back to byte order and
//! `to_ascii` degrades per its `best_effort` flag.

use core::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;

/// Locale-aware string comparison.
pub trait Collate: Send + Sync {
    /// Compares `a` and `b` under the system locale's collation rules.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Unicode normalization and ASCII transliteration.
pub trait Normalize: Send + Sync {
    /// Normalizes `s` to compatibility-decomposed form (NFKD).
    fn decompose_compat(&self, s: &str) -> String;

    /// Transliterates `s` to ASCII, best effort.
    fn transliterate(&self, s: &str) -> String;
}

/// The capabilities available to every [`UnicodeString`] in the process.
///
/// [`UnicodeString`]: crate::UnicodeString
#[derive(Default)]
pub struct ServiceRegistry {
    collator: Option<Box<dyn Collate>>,
    normalizer: Option<Box<dyn Normalize>>,
}

impl core::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("collator", &self.collator.is_some())
            .field("normalizer", &self.normalizer.is_some())
            .finish()
    }
}

impl ServiceRegistry {
    /// An empty registry: byte-wise comparison, no normalization service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collator: None,
            normalizer: None,
        }
    }

    /// Adds a collation service.
    #[must_use]
    pub fn with_collator(mut self, collator: Box<dyn Collate>) -> Self {
        self.collator = Some(collator);
        self
    }

    /// Adds a normalization service.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalize>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub(crate) fn collator(&self) -> Option<&dyn Collate> {
        self.collator.as_deref()
    }

    pub(crate) fn normalizer(&self) -> Option<&dyn Normalize> {
        self.normalizer.as_deref()
    }
}

static REGISTRY: OnceLock<ServiceRegistry> = OnceLock::new();

/// Installs the process-wide service registry.
///
/// At most one installation wins; the publish is thread-safe and idempotent.
/// Returns `false` when a registry (explicit or defaulted) is already in
/// place, leaving it unchanged. Install before the first string operation
/// that consults the registry, or the default registry is locked in.
pub fn install(registry: ServiceRegistry) -> bool {
    REGISTRY.set(registry).is_ok()
}

/// The installed registry, or the default one on first use.
///
/// With the `normalization` feature (default), the default registry bundles
/// [`NfkdNormalizer`]; otherwise it is empty.
pub(crate) fn registry() -> &'static ServiceRegistry {
    REGISTRY.get_or_init(default_registry)
}

#[cfg(feature = "normalization")]
fn default_registry() -> ServiceRegistry {
    ServiceRegistry::new().with_normalizer(Box::new(NfkdNormalizer))
}

#[cfg(not(feature = "normalization"))]
fn default_registry() -> ServiceRegistry {
    ServiceRegistry::new()
}

/// NFKD normalization over the `unicode-normalization` crate.
///
/// Transliteration is compatibility decomposition followed by dropping every
/// non-ASCII remnant, approximating an `//IGNORE//TRANSLIT` conversion.
#[cfg(feature = "normalization")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NfkdNormalizer;

#[cfg(feature = "normalization")]
impl Normalize for NfkdNormalizer {
    fn decompose_compat(&self, s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;

        s.nfkd().collect()
    }

    fn transliterate(&self, s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;

        s.nfkd().filter(char::is_ascii).collect()
    }
}

static UNICODE_PROBE: OnceLock<bool> = OnceLock::new();

/// Checks once that the bundled regex engine understands Unicode property
/// classes, the capability every pattern operation relies on.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPrerequisite`] when the probe fails. With the
/// stock `regex` crate this never happens; the probe mirrors a host-capability
/// check and is cached after the first call.
pub fn ensure_unicode_support() -> Result<(), Error> {
    let supported = *UNICODE_PROBE.get_or_init(|| Regex::new(r"\p{Alphabetic}").is_ok());
    if supported {
        Ok(())
    } else {
        Err(Error::UnsupportedPrerequisite(
            "the regex engine lacks Unicode property classes",
        ))
    }
}
