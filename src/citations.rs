//! Manual citations and the pass that attaches them to instruction entries.
//!
//! A citation table is a list of rules. Each rule carries a regex over the
//! instruction mnemonic (`DMULS\.L`, `CMP/(EQ|HS|GE|HI|GT)`, ...), the
//! environments it was documented for and the manual pages describing it.
//!
//! Text form, one rule per line, `#` starts a comment:
//!
//! ```text
//! DMULS\.L    sh2,sh2a,sh3,sh4,sh4a,sh_dsp    sh1_sh2:138 sh4:~238
//! ```
//!
//! A page written as `~238` is an estimate, not a page checked against the
//! manual, and is rendered as such.

use std::{fmt, fs, path::Path, str::FromStr};

use anyhow::{bail, Context, Result};
use log::{debug, trace};
use regex::Regex;
use strum_macros::{EnumIter, EnumString};

use crate::{insn::Entry, SuperhVersion};

const BUILTIN_TABLE: &str = include_str!("../data/citations.tsv");

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumIter, EnumString)]
pub enum Manual {
    #[strum(serialize = "sh1_sh2")]
    Sh1Sh2,
    #[strum(serialize = "sh2a")]
    Sh2a,
    #[strum(serialize = "sh3")]
    Sh3,
    #[strum(serialize = "sh4")]
    Sh4,
    #[strum(serialize = "sh4a")]
    Sh4a,
}

impl Manual {
    pub fn title(&self) -> &'static str {
        match self {
            Manual::Sh1Sh2 => "SH-1/SH-2/SH-DSP Software Manual",
            Manual::Sh2a => "SH-2A, SH2A-FPU Software Manual",
            Manual::Sh3 => "SH-3/SH-3E/SH3-DSP Software Manual",
            Manual::Sh4 => "SH-4 Software Manual",
            Manual::Sh4a => "SH-4A Software Manual",
        }
    }

    /// The CPUs the manual documents.
    pub fn covers(&self) -> SuperhVersion {
        match self {
            Manual::Sh1Sh2 => SuperhVersion::SH1 | SuperhVersion::SH2 | SuperhVersion::DSP,
            Manual::Sh2a => SuperhVersion::SH2A,
            Manual::Sh3 => SuperhVersion::SH3 | SuperhVersion::SH3E | SuperhVersion::DSP,
            Manual::Sh4 => SuperhVersion::SH4,
            Manual::Sh4a => SuperhVersion::SH4A,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Citation {
    pub manual: Manual,
    pub page: u16,
    pub approximate: bool,
}

impl Citation {
    pub fn new(manual: Manual, page: u16) -> Citation {
        Citation {
            manual,
            page,
            approximate: false,
        }
    }

    pub fn approximate(manual: Manual, page: u16) -> Citation {
        Citation {
            approximate: true,
            ..Citation::new(manual, page)
        }
    }
}

impl FromStr for Citation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((manual, page)) = s.split_once(':') else {
            bail!("citation `{s}` is not of the form manual:page");
        };
        let manual = Manual::from_str(manual)
            .with_context(|| format!("unknown manual `{manual}` in citation `{s}`"))?;
        let (approximate, page) = match page.strip_prefix('~') {
            Some(page) => (true, page),
            None => (false, page),
        };
        let page = page
            .parse()
            .with_context(|| format!("bad page number in citation `{s}`"))?;

        Ok(Citation {
            manual,
            page,
            approximate,
        })
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, p. {}", self.manual.title(), self.page)?;
        if self.approximate {
            write!(f, " (approximate)")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct CitationRule {
    pub pattern: String,
    pub environments: SuperhVersion,
    pub citations: Vec<Citation>,
    regex: Regex,
}

impl CitationRule {
    pub fn new(
        pattern: &str,
        environments: SuperhVersion,
        citations: Vec<Citation>,
    ) -> Result<CitationRule> {
        // Names are matched whole and without regard to case.
        let regex = Regex::new(&format!("(?i)^(?:{pattern})$"))
            .with_context(|| format!("bad citation pattern `{pattern}`"))?;

        Ok(CitationRule {
            pattern: pattern.to_string(),
            environments,
            citations,
            regex,
        })
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        self.environments.intersects(entry.insn.environments)
            && self.regex.is_match(entry.insn.mnemonic())
    }
}

#[derive(Clone, Debug, Default)]
pub struct CitationTable {
    rules: Vec<CitationRule>,
}

impl CitationTable {
    pub fn new(rules: Vec<CitationRule>) -> CitationTable {
        CitationTable { rules }
    }

    /// The table shipped with the crate. Its pages are estimates.
    pub fn builtin() -> Result<CitationTable> {
        BUILTIN_TABLE
            .parse::<CitationTable>()
            .context("in the built-in citation table")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<CitationTable> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read citation table {}", path.display()))?;
        text.parse::<CitationTable>()
            .with_context(|| format!("in citation table {}", path.display()))
    }

    pub fn rules(&self) -> &[CitationRule] {
        &self.rules
    }

    /// Attaches the citations of every rule matching `entry`, keeping only
    /// the manuals that document one of the entry's CPUs.
    pub fn cite(&self, entry: &mut Entry) {
        for rule in &self.rules {
            if !rule.matches(entry) {
                continue;
            }
            trace!("{} cited by `{}`", entry.insn.format, rule.pattern);
            for citation in &rule.citations {
                if citation.manual.covers().intersects(entry.insn.environments)
                    && !entry.citations.contains(citation)
                {
                    entry.citations.push(*citation);
                }
            }
        }

        if entry.citations.is_empty() {
            debug!("no citation for {}", entry.insn.format);
        }
    }
}

impl FromStr for CitationTable {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut rules = vec![];

        for (number, line) in s.lines().enumerate() {
            let line = match line.split_once('#') {
                Some((content, _)) => content,
                None => line,
            };
            let mut columns = line.split_whitespace();
            let Some(pattern) = columns.next() else {
                continue;
            };

            let rule = parse_rule(pattern, columns)
                .with_context(|| format!("line {}", number + 1))?;

            rules.push(rule);
        }

        Ok(CitationTable { rules })
    }
}

fn parse_rule<'a>(
    pattern: &str,
    mut columns: impl Iterator<Item = &'a str>,
) -> Result<CitationRule> {
    let Some(environments) = columns.next() else {
        bail!("missing environment list for `{pattern}`");
    };
    let environments = environments.parse()?;
    let citations = columns
        .map(str::parse)
        .collect::<Result<Vec<Citation>>>()?;
    if citations.is_empty() {
        bail!("no citations for `{pattern}`");
    }

    CitationRule::new(pattern, environments, citations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insn::Insn;

    static DMULS: Insn = Insn::new("DMULS.L Rm,Rn", "0011nnnnmmmm1101", "")
        .on(SuperhVersion::SH2_UP);
    static SHLD: Insn =
        Insn::new("SHLD Rm,Rn", "0100nnnnmmmm1101", "").on(SuperhVersion::SH3_UP);

    #[test]
    fn test_parse_citation() {
        let citation: Citation = "sh4:238".parse().unwrap();
        assert_eq!(citation.manual, Manual::Sh4);
        assert_eq!(citation.page, 238);
        assert_eq!(citation.to_string(), "SH-4 Software Manual, p. 238");
        assert!("sh9:1".parse::<Citation>().is_err());
        assert!("sh4".parse::<Citation>().is_err());
        assert!("sh4:~".parse::<Citation>().is_err());
    }

    #[test]
    fn test_approximate_pages_are_marked() {
        let citation: Citation = "sh4:~264".parse().unwrap();
        assert_eq!(citation, Citation::approximate(Manual::Sh4, 264));
        assert_eq!(
            citation.to_string(),
            "SH-4 Software Manual, p. 264 (approximate)"
        );
    }

    #[test]
    fn test_every_matching_rule_contributes() {
        let table: CitationTable = "DMULS\\.L  sh2  sh1_sh2:138\nDMUL[SU]\\.L  sh4  sh4:238"
            .parse()
            .unwrap();
        let mut entry = Entry::new(&DMULS).unwrap();
        table.cite(&mut entry);
        assert_eq!(
            entry.citations,
            vec![Citation::new(Manual::Sh1Sh2, 138), Citation::new(Manual::Sh4, 238)]
        );
    }

    #[test]
    fn test_regex_metacharacters_in_names() {
        let table: CitationTable = "DMULS\\.L  sh2,sh4  sh1_sh2:138 sh4:238 sh2a:200"
            .parse()
            .unwrap();
        let mut entry = Entry::new(&DMULS).unwrap();
        table.cite(&mut entry);

        assert_eq!(
            entry.citations,
            vec![
                Citation::new(Manual::Sh1Sh2, 138),
                Citation::new(Manual::Sh4, 238),
                Citation::new(Manual::Sh2a, 200),
            ]
        );
    }

    #[test]
    fn test_pattern_is_anchored() {
        let table: CitationTable = "DMULS  sh2  sh1_sh2:138".parse().unwrap();
        let mut entry = Entry::new(&DMULS).unwrap();
        table.cite(&mut entry);
        assert!(entry.citations.is_empty());
    }

    #[test]
    fn test_environment_mismatch_skips_rule() {
        let table: CitationTable = "SHLD  sh1,sh2  sh1_sh2:300\nSH[AL]D  sh3,sh4  sh3:150 sh4:390"
            .parse()
            .unwrap();
        let mut entry = Entry::new(&SHLD).unwrap();
        table.cite(&mut entry);
        assert_eq!(
            entry.citations,
            vec![
                Citation::new(Manual::Sh3, 150),
                Citation::new(Manual::Sh4, 390),
            ]
        );
    }

    #[test]
    fn test_manual_must_cover_an_environment() {
        let table: CitationTable = "SHLD  sh3  sh1_sh2:300 sh3:150".parse().unwrap();
        let mut entry = Entry::new(&SHLD).unwrap();
        table.cite(&mut entry);
        assert_eq!(entry.citations, vec![Citation::new(Manual::Sh3, 150)]);
    }

    #[test]
    fn test_duplicates_dropped() {
        let table: CitationTable = "SHLD  sh3  sh3:150\nSH.D  sh3  sh3:150".parse().unwrap();
        let mut entry = Entry::new(&SHLD).unwrap();
        table.cite(&mut entry);
        assert_eq!(entry.citations.len(), 1);
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = "# header\n\nADD  sh1  sh1_sh2:1\nSUB  sh9  sh1_sh2:2"
            .parse::<CitationTable>()
            .unwrap_err();
        assert!(format!("{err:#}").contains("line 4"));
        assert!("ADD  sh1".parse::<CitationTable>().is_err());
        assert!("ADD(  sh1  sh1_sh2:1".parse::<CitationTable>().is_err());
    }

    #[test]
    fn test_builtin_table_parses() {
        let table = CitationTable::builtin().unwrap();
        assert!(!table.rules().is_empty());
        assert!(table
            .rules()
            .iter()
            .flat_map(|rule| &rule.citations)
            .all(|citation| citation.approximate));
    }
}
