// src/nevra.rs

//! Package identity parsing and EVR ordering
//!
//! A package identity is the NEVRA tuple: name, epoch, version, release,
//! architecture, written `name-[epoch:]version-release.arch`. Two packages
//! are the same identity iff all five fields match. The `Evr` view carries
//! the epoch:version-release portion and provides the total ordering used
//! when ranking versions of the same package.

use crate::error::{Error, Result};
use semver::Version;
use std::cmp::Ordering;
use std::fmt;

/// A parsed package identity
///
/// Parsing is total over well-formed NEVRA strings and fails with a parse
/// error otherwise; no partial identity is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nevra {
    pub name: String,
    pub epoch: u64,
    pub version: String,
    pub release: String,
    pub arch: String,
}

impl Nevra {
    /// Parse a NEVRA string
    ///
    /// Format: name-[epoch:]version-release.arch
    /// Examples:
    /// - "saffron-3.6-1.x86_64" → name=saffron, epoch=0, version=3.6, release=1, arch=x86_64
    /// - "cumin-2:1.0-2.x86_64" → name=cumin, epoch=2, version=1.0, release=2, arch=x86_64
    ///
    /// Names may themselves contain dashes, so the string is split from the
    /// right: arch after the last dot, release after the last dash, version
    /// (with optional epoch prefix) after the next dash.
    pub fn parse(s: &str) -> Result<Self> {
        let dot = s
            .rfind('.')
            .ok_or_else(|| Error::ParseError(format!("no architecture suffix in '{}'", s)))?;
        let (nevr, arch) = (&s[..dot], &s[dot + 1..]);
        if arch.is_empty() {
            return Err(Error::ParseError(format!("empty architecture in '{}'", s)));
        }

        let dash = nevr
            .rfind('-')
            .ok_or_else(|| Error::ParseError(format!("no release component in '{}'", s)))?;
        let (nev, release) = (&nevr[..dash], &nevr[dash + 1..]);
        if release.is_empty() {
            return Err(Error::ParseError(format!("empty release in '{}'", s)));
        }

        let dash = nev
            .rfind('-')
            .ok_or_else(|| Error::ParseError(format!("no version component in '{}'", s)))?;
        let (name, ev) = (&nev[..dash], &nev[dash + 1..]);
        if name.is_empty() {
            return Err(Error::ParseError(format!("empty name in '{}'", s)));
        }

        let (epoch_str, version) = match ev.find(':') {
            Some(colon) => (&ev[..colon], &ev[colon + 1..]),
            None => ("", ev),
        };
        let epoch = if epoch_str.is_empty() {
            0
        } else {
            epoch_str
                .parse::<u64>()
                .map_err(|e| Error::ParseError(format!("invalid epoch in '{}': {}", s, e)))?
        };
        if version.is_empty() {
            return Err(Error::ParseError(format!("empty version in '{}'", s)));
        }

        Ok(Self {
            name: name.to_string(),
            epoch,
            version: version.to_string(),
            release: release.to_string(),
            arch: arch.to_string(),
        })
    }

    /// The epoch:version-release view of this identity
    pub fn evr(&self) -> Evr {
        Evr {
            epoch: self.epoch,
            version: self.version.clone(),
            release: self.release.clone(),
        }
    }
}

impl fmt::Display for Nevra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.name)?;
        if self.epoch > 0 {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}-{}.{}", self.version, self.release, self.arch)
    }
}

/// The epoch:version-release portion of a package identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evr {
    pub epoch: u64,
    pub version: String,
    pub release: String,
}

impl Evr {
    /// Convert the version component to semver for comparison
    ///
    /// Package versions are often not semver-compliant, so normalize:
    /// use the version directly if it parses, otherwise extract
    /// major.minor.patch from the leading dotted numbers.
    fn to_semver(&self) -> Version {
        if let Ok(v) = Version::parse(&self.version) {
            return v;
        }

        let parts: Vec<&str> = self.version.split('.').collect();
        let major = parts.first().and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
        let minor = parts.get(1).and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
        let patch = parts.get(2).and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
        Version::new(major, minor, patch)
    }

    /// Compare two EVRs: epoch first, then version, then release
    pub fn compare(&self, other: &Evr) -> Ordering {
        match self.epoch.cmp(&other.epoch) {
            Ordering::Equal => {}
            ord => return ord,
        }

        match self.to_semver().cmp(&other.to_semver()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        self.release.cmp(&other.release)
    }
}

impl fmt::Display for Evr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.epoch, self.version, self.release)
    }
}

impl Ord for Evr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Evr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nevra_parse_simple() {
        let n = Nevra::parse("saffron-3.6-1.x86_64").unwrap();
        assert_eq!(n.name, "saffron");
        assert_eq!(n.epoch, 0);
        assert_eq!(n.version, "3.6");
        assert_eq!(n.release, "1");
        assert_eq!(n.arch, "x86_64");
    }

    #[test]
    fn test_nevra_parse_with_epoch() {
        let n = Nevra::parse("cumin-2:1.0-2.x86_64").unwrap();
        assert_eq!(n.epoch, 2);
        assert_eq!(n.version, "1.0");
    }

    #[test]
    fn test_nevra_parse_dashed_name() {
        let n = Nevra::parse("herb-grinder-0.5-3.noarch").unwrap();
        assert_eq!(n.name, "herb-grinder");
        assert_eq!(n.version, "0.5");
        assert_eq!(n.release, "3");
        assert_eq!(n.arch, "noarch");
    }

    #[test]
    fn test_nevra_parse_malformed() {
        assert!(Nevra::parse("saffron").is_err());
        assert!(Nevra::parse("saffron-3.6").is_err());
        assert!(Nevra::parse("saffron-3.6-1").is_err());
        assert!(Nevra::parse("-3.6-1.x86_64").is_err());
        assert!(Nevra::parse("saffron-x:3.6-1.x86_64").is_err());
    }

    #[test]
    fn test_nevra_roundtrip() {
        for s in [
            "saffron-3.6-1.x86_64",
            "cumin-2:1.0-2.x86_64",
            "herb-grinder-0.5-3.noarch",
        ] {
            assert_eq!(Nevra::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_nevra_identity() {
        let a = Nevra::parse("saffron-3.6-1.x86_64").unwrap();
        let b = Nevra::parse("saffron-3.6-1.x86_64").unwrap();
        let c = Nevra::parse("saffron-3.6-1.i686").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_evr_compare_epochs() {
        let a = Nevra::parse("p-1:1.0-1.noarch").unwrap().evr();
        let b = Nevra::parse("p-2.0-1.noarch").unwrap().evr();
        assert!(a > b); // higher epoch wins even with lower version
    }

    #[test]
    fn test_evr_compare_versions() {
        let a = Nevra::parse("p-1.2-1.noarch").unwrap().evr();
        let b = Nevra::parse("p-1.10-1.noarch").unwrap().evr();
        assert!(a < b); // numeric, not lexicographic
    }

    #[test]
    fn test_evr_compare_releases() {
        let a = Nevra::parse("p-1.2-1.noarch").unwrap().evr();
        let b = Nevra::parse("p-1.2-2.noarch").unwrap().evr();
        assert!(a < b);
    }

    #[test]
    fn test_evr_display() {
        let e = Nevra::parse("cumin-2:1.0-2.x86_64").unwrap().evr();
        assert_eq!(e.to_string(), "2:1.0-2");
        let e = Nevra::parse("saffron-3.6-1.x86_64").unwrap().evr();
        assert_eq!(e.to_string(), "0:3.6-1");
    }
}
