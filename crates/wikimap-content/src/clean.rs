//! Infobox field-name normalization.
//!
//! [`FieldCleaner::clean`] maps a raw field name to the label used as a graph
//! node. The pipeline, in order:
//!
//! 1. Skip rules: configured literal prefixes (default `"File:"`),
//!    punctuation-only strings, and names wrapped in decorative punctuation
//!    runs (`"!!!!!foo!!!!!"`) are returned untouched.
//! 2. Unicode whitespace (e.g. U+00A0) becomes a plain space.
//! 3. HTML-like tags and entity references are removed; wiki links
//!    (`[[target|text]]`) are replaced by their text.
//! 4. Citation markers (`[5]`) and parenthetical qualifiers (`(s)`, `(men)`)
//!    are removed.
//! 5. Lowercase; `_` and `/` become spaces; other punctuation is dropped
//!    except `%`, `$`, `&`, `,`, `-` and possessive apostrophes.
//! 6. Whitespace is collapsed and trimmed.

use log::trace;
use regex::Regex;
use std::sync::LazyLock;
use wikimap_core::CleanerConfig;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("Invalid tag regex"));

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#?[A-Za-z0-9]+;").expect("Invalid entity regex"));

static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(?:[^\[\]|]*\|)?([^\[\]|]*)\]\]").expect("Invalid wikilink regex")
});

static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\[\]]*\]").expect("Invalid citation regex"));

static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").expect("Invalid parenthetical regex"));

static DEFAULT_CLEANER: LazyLock<FieldCleaner> = LazyLock::new(FieldCleaner::default);

/// Punctuation that carries meaning in a field name and is kept.
const PRESERVED: &[char] = &['%', '$', '&', ',', '-'];

/// Normalizes raw infobox field names.
///
/// # Example
///
/// ```rust
/// use wikimap_content::FieldCleaner;
/// use wikimap_core::CleanerConfig;
///
/// let cleaner = FieldCleaner::new(&CleanerConfig {
///     skip_prefixes: vec!["Image:".to_string()],
/// });
/// assert_eq!(cleaner.clean("Image: x.png"), "Image: x.png");
/// assert_eq!(cleaner.clean("Web site:"), "web site");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCleaner {
    skip_prefixes: Vec<String>,
}

impl Default for FieldCleaner {
    fn default() -> Self {
        Self::new(&CleanerConfig::default())
    }
}

impl FieldCleaner {
    /// Creates a cleaner from configuration.
    pub fn new(config: &CleanerConfig) -> Self {
        Self {
            skip_prefixes: config.skip_prefixes.clone(),
        }
    }

    /// Literal prefixes that bypass cleaning.
    pub fn skip_prefixes(&self) -> &[String] {
        &self.skip_prefixes
    }

    /// Returns `true` if `raw` is passed through unchanged.
    pub fn should_skip(&self, raw: &str) -> bool {
        if self.skip_prefixes.iter().any(|p| raw.starts_with(p.as_str())) {
            return true;
        }
        let trimmed = raw.trim();
        is_punctuation_only(trimmed) || is_decorated(trimmed)
    }

    /// Cleans a raw field name.
    pub fn clean(&self, raw: &str) -> String {
        if self.should_skip(raw) {
            trace!("clean: skipping {raw:?}");
            return raw.to_string();
        }

        let text = normalize_whitespace(raw);
        let text = TAG_RE.replace_all(&text, " ");
        let text = ENTITY_RE.replace_all(&text, " ");
        let text = WIKILINK_RE.replace_all(&text, "$1");
        let text = CITATION_RE.replace_all(&text, " ");
        let text = PARENTHETICAL_RE.replace_all(&text, " ");
        let text = strip_punctuation(&text.to_lowercase());

        let cleaned = text.split_whitespace().collect::<Vec<&str>>().join(" ");
        trace!("clean: {raw:?} -> {cleaned:?}");
        cleaned
    }
}

/// Cleans a raw field name with the default [`FieldCleaner`].
///
/// # Examples
///
/// ```
/// use wikimap_content::clean;
///
/// assert_eq!(clean("Max. devices"), "max devices");
/// assert_eq!(clean("% of total exports"), "% of total exports");
/// assert_eq!(clean("!!!!!foo!!!!!"), "!!!!!foo!!!!!");
/// assert_eq!(clean("   "), "");
/// ```
pub fn clean(raw: &str) -> String {
    DEFAULT_CLEANER.clean(raw)
}

fn is_punctuation_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_punctuation())
}

/// Wiki and HTML markup characters; these never count as decoration.
const MARKUP: &[char] = &['\'', '[', ']', '<', '>'];

fn is_decoration(c: &char) -> bool {
    c.is_ascii_punctuation() && !MARKUP.contains(c)
}

/// Begins and ends with runs of two or more decorative punctuation characters.
fn is_decorated(s: &str) -> bool {
    let leading = s.chars().take_while(is_decoration).count();
    let trailing = s.chars().rev().take_while(is_decoration).count();
    leading >= 2 && trailing >= 2
}

fn normalize_whitespace(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2019}' => '\'',
            c if c.is_whitespace() => ' ',
            c => c,
        })
        .collect()
}

/// Drops punctuation outside the preserved set, then resolves apostrophes.
fn strip_punctuation(s: &str) -> String {
    let kept: Vec<char> = s
        .chars()
        .filter_map(|c| match c {
            '_' | '/' => Some(' '),
            c if c.is_alphanumeric() || c == ' ' || c == '\'' => Some(c),
            c if PRESERVED.contains(&c) => Some(c),
            _ => None,
        })
        .collect();

    kept.iter()
        .enumerate()
        .filter(|&(i, &c)| c != '\'' || is_possessive(&kept, i))
        .map(|(_, &c)| c)
        .collect()
}

/// Checks whether the apostrophe at `i` marks a possessive (`women's`, `teams'`).
///
/// Neighbouring apostrophes are looked through, since they get dropped.
fn is_possessive(chars: &[char], i: usize) -> bool {
    let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) else {
        return false;
    };
    let mut rest = chars[i + 1..].iter().copied().filter(|&c| c != '\'');
    let next = rest.next();
    let after = rest.next();
    let ends_word = |c: Option<char>| c.is_none_or(|c| !c.is_alphanumeric());

    if prev.is_alphabetic() && next == Some('s') && ends_word(after) {
        return true;
    }
    prev == 's' && ends_word(next)
}
