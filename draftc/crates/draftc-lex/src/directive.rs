//! Directive blocks and the closed set of command keywords.
//!
//! A controller action in a draft is written as a list of `keyword: body`
//! lines. Upstream parsing turns that list into a [`DirectiveBlock`]; this
//! module also owns the [`Command`] enum that decides which keywords the
//! lexer understands.

use std::fmt;

use indexmap::IndexMap;

/// A recognized directive keyword.
///
/// Matching is case-sensitive: `Render` is not `render`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// `query` - database query
    Query,
    /// `render` - render a view
    Render,
    /// `fire` - fire an event
    Fire,
    /// `dispatch` - dispatch a job
    Dispatch,
    /// `redirect` - redirect to a route
    Redirect,
    /// `send` - send a mailable or notification
    Send,
    /// `validate` - validate request input
    Validate,
    /// `save` - persist a model
    Save,
    /// `update` - update a model
    Update,
    /// `delete` - delete a model
    Delete,
    /// `find` - look up a model
    Find,
    /// `flash` - flash a value to the session
    Flash,
    /// `store` - store a value in the session
    Store,
}

impl Command {
    /// Every recognized command, in documentation order.
    pub const ALL: [Command; 13] = [
        Command::Query,
        Command::Render,
        Command::Fire,
        Command::Dispatch,
        Command::Redirect,
        Command::Send,
        Command::Validate,
        Command::Save,
        Command::Update,
        Command::Delete,
        Command::Find,
        Command::Flash,
        Command::Store,
    ];

    /// Look up a command by its exact keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftc_lex::Command;
    ///
    /// assert_eq!(Command::from_keyword("render"), Some(Command::Render));
    /// assert_eq!(Command::from_keyword("Render"), None);
    /// assert_eq!(Command::from_keyword("respond"), None);
    /// ```
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Command::Query),
            "render" => Some(Command::Render),
            "fire" => Some(Command::Fire),
            "dispatch" => Some(Command::Dispatch),
            "redirect" => Some(Command::Redirect),
            "send" => Some(Command::Send),
            "validate" => Some(Command::Validate),
            "save" => Some(Command::Save),
            "update" => Some(Command::Update),
            "delete" => Some(Command::Delete),
            "find" => Some(Command::Find),
            "flash" => Some(Command::Flash),
            "store" => Some(Command::Store),
            _ => None,
        }
    }

    /// The keyword as written in a draft.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Command::Query => "query",
            Command::Render => "render",
            Command::Fire => "fire",
            Command::Dispatch => "dispatch",
            Command::Redirect => "redirect",
            Command::Send => "send",
            Command::Validate => "validate",
            Command::Save => "save",
            Command::Update => "update",
            Command::Delete => "delete",
            Command::Find => "find",
            Command::Flash => "flash",
            Command::Store => "store",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping from directive keyword to its raw, trimmed body.
///
/// Keys are unique. Re-inserting a keyword replaces its body but keeps the
/// position where the keyword was first inserted.
///
/// # Examples
///
/// ```
/// use draftc_lex::DirectiveBlock;
///
/// let block: DirectiveBlock = [
///     ("query", "all"),
///     ("render", "post.index"),
///     ("query", "all:author"),
/// ]
/// .into_iter()
/// .collect();
///
/// let keys: Vec<_> = block.keys().collect();
/// assert_eq!(keys, ["query", "render"]);
/// assert_eq!(block.get("query"), Some("all:author"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectiveBlock {
    directives: IndexMap<String, String>,
}

impl DirectiveBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a directive, returning the body it replaced, if any.
    pub fn insert(&mut self, keyword: impl Into<String>, body: impl Into<String>) -> Option<String> {
        self.directives.insert(keyword.into(), body.into())
    }

    /// Body for `keyword`, if present.
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.directives.get(keyword).map(String::as_str)
    }

    /// Number of directives in the block.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Whether the block holds no directives.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Keywords in block order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.directives.keys().map(String::as_str)
    }

    /// `(keyword, body)` pairs in block order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.directives
            .iter()
            .map(|(keyword, body)| (keyword.as_str(), body.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for DirectiveBlock
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut block = DirectiveBlock::new();
        block.extend(iter);
        block
    }
}

impl<K, V> Extend<(K, V)> for DirectiveBlock
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (keyword, body) in iter {
            self.insert(keyword, body);
        }
    }
}
