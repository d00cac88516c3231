// config.rs - 运行参数

use crate::error::{GbsTrimError, Result};
use crate::site::OVERHANG_LEN;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Enzymes that can be named instead of spelling out their site.
const KNOWN_ENZYMES: &[(&str, &str)] = &[("PSTI", "CTGCAG")];

/// Upper-cased restriction-site sequence over `ACGT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionSite(String);

impl RestrictionSite {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for RestrictionSite {
    type Err = GbsTrimError;

    /// Accepts a site sequence (`CTGCAG`) or a known enzyme name (`PstI`).
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        if upper.is_empty() {
            return Err(GbsTrimError::Config("restriction site is empty".to_string()));
        }
        if let Some((_, site)) = KNOWN_ENZYMES.iter().find(|(name, _)| *name == upper) {
            return Ok(RestrictionSite(site.to_string()));
        }
        if let Some(bad) = upper.chars().find(|c| !matches!(*c, 'A' | 'C' | 'G' | 'T')) {
            return Err(GbsTrimError::Config(format!(
                "restriction site {:?} contains invalid base {:?}",
                s, bad
            )));
        }
        if upper.len() < OVERHANG_LEN {
            return Err(GbsTrimError::Config(format!(
                "restriction site {:?} is shorter than the {} base overhang",
                s, OVERHANG_LEN
            )));
        }
        Ok(RestrictionSite(upper))
    }
}

impl fmt::Display for RestrictionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a run needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub site: RestrictionSite,
    pub dimer_file: Option<PathBuf>,
}

impl Config {
    pub fn new(input: PathBuf, re_site: &str, dimer_file: Option<PathBuf>) -> Result<Self> {
        Ok(Config {
            input,
            site: re_site.parse()?,
            dimer_file,
        })
    }
}
