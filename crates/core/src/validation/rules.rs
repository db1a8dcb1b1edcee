//! Validation rule types.
//!
//! Rule identifiers are open-ended strings: the well-known names map to
//! dedicated checks and everything else is treated as a regular expression.
//! [`Rule::parse`] performs that mapping once, when the rule is registered.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use validator::ValidateEmail;

use super::value::FieldValue;

pub const NOT_EMPTY: &str = "not_empty";
pub const INTEGER: &str = "integer";
pub const NUMERIC: &str = "numeric";
pub const URL: &str = "url";
pub const EMAIL: &str = "email";

/// Identifiers with dedicated checks, in display order.
pub const WELL_KNOWN_RULES: [&str; 5] = [NOT_EMPTY, INTEGER, NUMERIC, URL, EMAIL];

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.?[0-9]*$").expect("valid regex"));

/// Inline flags understood in `/pattern/flags` notation. `u` is accepted and
/// dropped since patterns are always Unicode-aware.
const DELIMITED_FLAGS: &str = "imsxuU";

/// A single validation rule attached to a field.
#[derive(Debug, Clone)]
pub enum Rule {
    NotEmpty,
    Integer,
    Numeric,
    Url,
    Email,
    Pattern(PatternRule),
    Predicate(PredicateRule),
}

impl Rule {
    /// Map a rule identifier to its rule. Unknown identifiers become patterns.
    pub fn parse(rule_id: &str) -> Self {
        match rule_id {
            NOT_EMPTY => Self::NotEmpty,
            INTEGER => Self::Integer,
            NUMERIC => Self::Numeric,
            URL => Self::Url,
            EMAIL => Self::Email,
            other => Self::Pattern(PatternRule::new(other)),
        }
    }

    /// The identifier recorded in the error state when this rule fails.
    pub fn id(&self) -> &str {
        match self {
            Self::NotEmpty => NOT_EMPTY,
            Self::Integer => INTEGER,
            Self::Numeric => NUMERIC,
            Self::Url => URL,
            Self::Email => EMAIL,
            Self::Pattern(p) => p.source(),
            Self::Predicate(p) => &p.name,
        }
    }

    /// Evaluate the rule against a value.
    ///
    /// Only `not_empty` looks at empty values; every other rule passes them.
    pub fn check(&self, value: &FieldValue) -> bool {
        match self {
            Self::NotEmpty => !value.is_empty(),
            _ if value.is_empty() => true,
            Self::Predicate(p) => (p.check)(value),
            Self::Integer => INTEGER_RE.is_match(&value.to_string()),
            Self::Numeric => NUMERIC_RE.is_match(&value.to_string()),
            Self::Url => is_absolute_url(&value.to_string()),
            Self::Email => is_email(&value.to_string()),
            Self::Pattern(p) => p.is_match(&value.to_string()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A regular-expression rule.
///
/// The pattern is compiled once. A pattern that fails to compile never
/// matches, so the rule always fails on non-empty input.
#[derive(Debug, Clone)]
pub struct PatternRule {
    source: String,
    regex: Option<Regex>,
}

impl PatternRule {
    pub fn new(source: &str) -> Self {
        let regex = match Regex::new(&translate_delimited(source)) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(
                    pattern = %source,
                    error = %e,
                    "Invalid validation pattern, rule will reject all non-empty values"
                );
                None
            }
        };
        Self {
            source: source.to_string(),
            regex,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern compiled.
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// A caller-supplied check identified by name.
#[derive(Clone)]
pub struct PredicateRule {
    pub name: String,
    check: Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>,
}

impl PredicateRule {
    pub fn new<F>(name: &str, check: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            check: Arc::new(check),
        }
    }
}

impl fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Convert `/body/flags` notation into a plain pattern with inline flags.
///
/// Anything not in that shape is returned unchanged.
fn translate_delimited(source: &str) -> String {
    let Some(rest) = source.strip_prefix('/') else {
        return source.to_string();
    };
    let Some(end) = rest.rfind('/') else {
        return source.to_string();
    };
    let (body, flags) = (&rest[..end], &rest[end + 1..]);
    if !flags.chars().all(|c| DELIMITED_FLAGS.contains(c)) {
        return source.to_string();
    }

    let inline: String = flags.chars().filter(|c| *c != 'u').collect();
    if inline.is_empty() {
        body.to_string()
    } else {
        format!("(?{inline}){body}")
    }
}

fn is_email(text: &str) -> bool {
    if !text.validate_email() || text.chars().any(char::is_whitespace) {
        return false;
    }
    text.rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

fn is_absolute_url(text: &str) -> bool {
    match url::Url::parse(text) {
        Ok(parsed) => parsed.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn passes(rule_id: &str, value: &str) -> bool {
        Rule::parse(rule_id).check(&FieldValue::from(value))
    }

    #[test]
    fn parse_maps_well_known_names() {
        assert_matches!(Rule::parse("not_empty"), Rule::NotEmpty);
        assert_matches!(Rule::parse("integer"), Rule::Integer);
        assert_matches!(Rule::parse("numeric"), Rule::Numeric);
        assert_matches!(Rule::parse("url"), Rule::Url);
        assert_matches!(Rule::parse("email"), Rule::Email);
        assert_matches!(Rule::parse("^a+$"), Rule::Pattern(_));
    }

    #[test]
    fn id_round_trips_through_parse() {
        for id in WELL_KNOWN_RULES.iter().copied().chain(["^[a-z]+$"]) {
            assert_eq!(Rule::parse(id).id(), id);
        }
    }

    #[test]
    fn integer_accepts_digits_only() {
        assert!(passes("integer", "123"));
        assert!(passes("integer", "007"));
        assert!(!passes("integer", "12.3"));
        assert!(!passes("integer", "-5"));
        assert!(!passes("integer", "12a"));
        assert!(!passes("integer", "12\n"));
        assert!(!passes("integer", "١٢٣"));
    }

    #[test]
    fn numeric_accepts_optional_fraction() {
        assert!(passes("numeric", "12"));
        assert!(passes("numeric", "12.5"));
        assert!(passes("numeric", "12."));
        assert!(!passes("numeric", ".5"));
        assert!(!passes("numeric", "-1.5"));
        assert!(!passes("numeric", "1.2.3"));
    }

    #[test]
    fn email_requires_dotted_domain() {
        assert!(passes("email", "user@example.com"));
        assert!(passes("email", "first.last+tag@mail.example.org"));
        assert!(!passes("email", "user@localhost"));
        assert!(!passes("email", "user example.com"));
        assert!(!passes("email", "user@exa mple.com"));
        assert!(!passes("email", "@example.com"));
    }

    #[test]
    fn url_requires_scheme_and_host() {
        assert!(passes("url", "http://example.com"));
        assert!(passes("url", "https://example.com/path?q=1#frag"));
        assert!(passes("url", "ftp://files.example.com"));
        assert!(!passes("url", "example.com"));
        assert!(!passes("url", "mailto:user@example.com"));
        assert!(!passes("url", "http://"));
    }

    #[test]
    fn empty_values_skip_all_but_not_empty() {
        for id in [INTEGER, NUMERIC, URL, EMAIL, "^x$"] {
            assert!(Rule::parse(id).check(&FieldValue::Null), "{id}");
            assert!(Rule::parse(id).check(&FieldValue::from("")), "{id}");
            assert!(Rule::parse(id).check(&FieldValue::Int(0)), "{id}");
        }
        assert!(!Rule::NotEmpty.check(&FieldValue::Null));
    }

    #[test]
    fn plain_pattern_matches_whole_text() {
        assert!(passes("^[A-Z]+$", "ABC"));
        assert!(!passes("^[A-Z]+$", "abc"));
    }

    #[test]
    fn delimited_pattern_honours_flags() {
        assert!(passes("/^[a-z]+$/i", "ABC"));
        assert!(!passes("/^[a-z]+$/", "ABC"));
        assert!(passes("/^a.b$/s", "a\nb"));
        assert!(passes("/^\\d+$/u", "42"));
    }

    #[test]
    fn unknown_suffix_is_not_treated_as_flags() {
        assert_eq!(translate_delimited("/a/q"), "/a/q");
        assert_eq!(translate_delimited("/a/im"), "(?im)a");
        assert_eq!(translate_delimited("a/b"), "a/b");
    }

    #[test]
    fn invalid_pattern_fails_closed() {
        let rule = PatternRule::new("([unclosed");
        assert!(!rule.is_valid());
        assert!(!rule.is_match("anything"));
        assert!(!Rule::Pattern(rule.clone()).check(&FieldValue::from("x")));
        // Empty values still pass, as for every non-`not_empty` rule.
        assert!(Rule::Pattern(rule).check(&FieldValue::from("")));
    }

    #[test]
    fn predicate_receives_original_value() {
        let rule = Rule::Predicate(PredicateRule::new("even", |v| {
            matches!(v, FieldValue::Int(i) if i % 2 == 0)
        }));
        assert_eq!(rule.id(), "even");
        assert!(rule.check(&FieldValue::Int(4)));
        assert!(!rule.check(&FieldValue::Int(3)));
    }
}
