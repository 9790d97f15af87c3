//! Sensitive-data filter for post sources
//!
//! Each rule is a named matcher run against the raw text of a post, front-matter
//! included. Any match drops the whole post from the build; nothing is partially
//! redacted. The rule set is best-effort and is not a security guarantee: it only
//! knows the token shapes listed below.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Words from the BIP-39 list used by the recovery-phrase heuristic
pub const RECOVERY_WORDS: &[&str] = &["abandon", "ability", "able", "about", "above"];

/// How a rule decides whether text matches
pub enum Matcher {
    /// Any match of the pattern
    Pattern(Regex),
    /// At least `min` distinct words from `words`, as whole words, any case
    Words { words: &'static [&'static str], min: usize },
}

/// A named detection rule
pub struct Rule {
    pub name: &'static str,
    matcher: Matcher,
}

impl Rule {
    fn pattern(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            matcher: Matcher::Pattern(Regex::new(pattern).unwrap()),
        }
    }

    /// Test this rule alone against `text`
    pub fn matches(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::Words { words, min } => {
                let found: HashSet<String> = WORD_RE
                    .find_iter(text)
                    .map(|m| m.as_str().to_lowercase())
                    .filter(|w| words.contains(&w.as_str()))
                    .collect();
                found.len() >= *min
            }
        }
    }
}

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[A-Za-z]+").unwrap();

    /// The rules, in evaluation order
    pub static ref RULES: Vec<Rule> = vec![
        Rule::pattern(
            "credential-keyword",
            r"(?i)\b(password|passwd|secret|api[ _-]?key|private[ _-]?key)\s*[:=]",
        ),
        Rule::pattern(
            "api-token",
            r"\b(sk-[A-Za-z0-9_-]{20,}|gh[pousr]_[A-Za-z0-9]{36}|github_pat_[A-Za-z0-9_]{22,}|xox[abposr]-[A-Za-z0-9-]{10,}|AIza[0-9A-Za-z_-]{35})",
        ),
        Rule::pattern("bearer-token", r"(?i)\bbearer\s+[A-Za-z0-9._~+/=-]{20,}"),
        Rule::pattern("pem-private-key", r"-----BEGIN ([A-Z0-9]+ )*PRIVATE KEY-----"),
        Rule::pattern(
            "credentialed-url",
            r"\b[A-Za-z][A-Za-z0-9+.-]*://[^\s/:@]+:[^\s/@]+@",
        ),
        Rule::pattern("cloud-access-key", r"\b(AKIA|ASIA)[0-9A-Z]{16}\b"),
        Rule::pattern("claim-url", r"(?i)/(claim|verify)/[A-Za-z0-9_-]{20,}"),
        Rule {
            name: "recovery-phrase",
            matcher: Matcher::Words {
                words: RECOVERY_WORDS,
                min: 2,
            },
        },
    ];
}

/// First rule matching `text`, if any
pub fn scan(text: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(text))
}

/// Whether `text` trips any rule
pub fn contains_sensitive(text: &str) -> bool {
    scan(text).is_some()
}
