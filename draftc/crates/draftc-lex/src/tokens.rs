//! Tokenizing helpers shared by the directive parsers.
//!
//! Directive bodies are split positionally: blanks separate tokens, commas
//! separate list items, and a `with ` clause trails the object name. None of
//! these helpers fail; odd input yields odd (but well-formed) output.

use std::sync::LazyLock;

use regex::Regex;

/// One or more spaces or tabs.
static BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// A comma, optionally followed by spaces or tabs.
static LIST_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",[ \t]*").unwrap());

/// Spellings a data clause may start with: `with: a, b` or `with a, b`.
pub const WITH_PREFIXES: [&str; 2] = ["with:", "with "];

/// Number of characters dropped from the front of a data clause.
const WITH_PREFIX_LEN: usize = 5;

/// Split `body` on every run of spaces or tabs.
///
/// Empty pieces are kept: an empty body yields one empty token and leading
/// blanks yield a leading empty token.
///
/// # Examples
///
/// ```
/// use draftc_lex::tokens::extract_tokens;
///
/// assert_eq!(extract_tokens("where:title order:id"), ["where:title", "order:id"]);
/// assert_eq!(extract_tokens("a \t b"), ["a", "b"]);
/// assert_eq!(extract_tokens(""), [""]);
/// ```
pub fn extract_tokens(body: &str) -> Vec<String> {
    BLANKS.split(body).map(str::to_string).collect()
}

/// Split `body` into at most `limit` pieces, padding with `None` to `limit`.
///
/// The last piece keeps everything after the `limit - 1`th blank run, inner
/// blanks included. A `limit` of zero means no limit and no padding.
///
/// # Examples
///
/// ```
/// use draftc_lex::tokens::extract_tokens_limited;
///
/// assert_eq!(
///     extract_tokens_limited("show with: post, comments", 2),
///     [Some("show".to_string()), Some("with: post, comments".to_string())]
/// );
/// assert_eq!(extract_tokens_limited("show", 2), [Some("show".to_string()), None]);
/// ```
pub fn extract_tokens_limited(body: &str, limit: usize) -> Vec<Option<String>> {
    if limit == 0 {
        return extract_tokens(body).into_iter().map(Some).collect();
    }

    let mut tokens: Vec<Option<String>> = BLANKS
        .splitn(body, limit)
        .map(|piece| Some(piece.to_string()))
        .collect();
    tokens.resize(limit, None);
    tokens
}

/// Split a comma-separated list, swallowing blanks after each comma.
///
/// # Examples
///
/// ```
/// use draftc_lex::tokens::split_list;
///
/// assert_eq!(split_list("title|required, body|required"), ["title|required", "body|required"]);
/// assert_eq!(split_list("a,b"), ["a", "b"]);
/// ```
pub fn split_list(s: &str) -> Vec<String> {
    LIST_SEPARATOR.split(s).map(str::to_string).collect()
}

/// Split `body` into its object name and the trailing clause, if any.
///
/// A trailing clause that is empty or exactly `0` counts as absent.
pub fn split_with_clause(body: &str) -> (String, Option<String>) {
    let mut tokens = extract_tokens_limited(body, 2).into_iter();
    let object = tokens.next().flatten().unwrap_or_default();
    let rest = tokens
        .next()
        .flatten()
        .filter(|rest| !rest.is_empty() && rest != "0");
    (object, rest)
}

/// Whether a trailing clause starts with one of [`WITH_PREFIXES`].
pub fn has_with_prefix(rest: &str) -> bool {
    WITH_PREFIXES.iter().any(|prefix| rest.starts_with(prefix))
}

/// Turn a trailing clause into its data items.
///
/// The lenient form drops the first five characters unconditionally, so a
/// clause that does not begin with `with:` or `with ` loses whatever is there
/// instead. The strict form requires one of those prefixes and yields no data
/// without it. Either way, blanks between the prefix and the first item go.
pub fn with_clause_data(rest: &str, strict: bool) -> Vec<String> {
    let list = if strict {
        match WITH_PREFIXES
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix))
        {
            Some(list) => list,
            None => return Vec::new(),
        }
    } else {
        rest.char_indices()
            .nth(WITH_PREFIX_LEN)
            .map_or("", |(offset, _)| &rest[offset..])
    };

    split_list(list.trim_start_matches([' ', '\t']))
}

/// Parse `object [with: a, b, ...]` into the object name and its data.
///
/// # Examples
///
/// ```
/// use draftc_lex::tokens::parse_with_statement;
///
/// let (view, data) = parse_with_statement("post.show with: post, comments", false);
/// assert_eq!(view, "post.show");
/// assert_eq!(data, ["post", "comments"]);
///
/// let (route, data) = parse_with_statement("post.index", false);
/// assert_eq!(route, "post.index");
/// assert!(data.is_empty());
/// ```
pub fn parse_with_statement(body: &str, strict: bool) -> (String, Vec<String>) {
    let (object, rest) = split_with_clause(body);
    let data = rest
        .map(|rest| with_clause_data(&rest, strict))
        .unwrap_or_default();
    (object, data)
}
