//! Shareable team codes
//!
//! A team code is the title slug followed by one token per occupied slot,
//! joined with `+`:
//!
//! ```text
//! swsh+charizard-gmax+mr%20mime+pikachu
//! ```
//!
//! Slugs are percent-encoded so that spaces and `+` inside a slug never
//! collide with the delimiter. The literal `-gmax` suffix marks the giant form;
//! a slug that itself ends in `-gmax` has that dash escaped.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::debug;

use crate::lookup::RosterLookup;
use crate::state::TeamState;

pub const DELIMITER: char = '+';
pub const GIANT_SUFFIX: &str = "-gmax";

const ESCAPED_GIANT_SUFFIX: &str = "%2Dgmax";

/// Bytes escaped inside a token; non-ASCII is always escaped
const TOKEN: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemToken {
    pub slug: String,
    pub giant: bool,
}

impl ItemToken {
    pub fn new(slug: impl Into<String>, giant: bool) -> Self {
        Self {
            slug: slug.into(),
            giant,
        }
    }
}

/// Parsed team code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCode {
    pub title: String,
    pub items: Vec<ItemToken>,
}

impl TeamCode {
    /// Build the code for a team, in current slot order
    pub fn from_team(team: &TeamState, roster: &impl RosterLookup) -> Self {
        let items = team
            .members()
            .filter_map(|member| {
                roster
                    .slug(member.id)
                    .map(|slug| ItemToken::new(slug, member.giant))
            })
            .collect();

        Self {
            title: team.title().to_string(),
            items,
        }
    }

    /// Parse a code, tolerating a leading `#` and empty tokens
    ///
    /// Returns `None` when there is no title token. Item tokens that are not
    /// valid percent-encoded UTF-8 are dropped.
    pub fn parse(fragment: &str) -> Option<Self> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut tokens = fragment.split(DELIMITER).filter(|t| !t.is_empty());

        let title = decode_token(tokens.next()?)?;
        let items = tokens
            .filter_map(|token| {
                let (slug, giant) = match token.strip_suffix(GIANT_SUFFIX) {
                    Some(slug) => (slug, true),
                    None => (token, false),
                };
                let Some(slug) = decode_token(slug) else {
                    debug!(token, "Skipping undecodable item token");
                    return None;
                };
                Some(ItemToken { slug, giant })
            })
            .collect();

        Some(Self { title, items })
    }

    /// Serialize to the `title+item+item` form
    pub fn to_fragment(&self) -> String {
        let mut out = encode_token(&self.title);
        for item in &self.items {
            out.push(DELIMITER);
            out.push_str(&encode_token(&item.slug));
            if item.giant {
                out.push_str(GIANT_SUFFIX);
            }
        }
        out
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fragment())
    }
}

fn encode_token(raw: &str) -> String {
    let encoded = utf8_percent_encode(raw, TOKEN).to_string();
    match encoded.strip_suffix(GIANT_SUFFIX) {
        Some(stem) => format!("{stem}{ESCAPED_GIANT_SUFFIX}"),
        None => encoded,
    }
}

fn decode_token(token: &str) -> Option<String> {
    percent_decode_str(token)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
        .filter(|s| !s.is_empty())
}

/// Serialize a team to its shareable code
pub fn encode(team: &TeamState, roster: &impl RosterLookup) -> String {
    TeamCode::from_team(team, roster).to_fragment()
}

/// Parse a shareable code; see [`TeamCode::parse`]
pub fn decode(fragment: &str) -> Option<TeamCode> {
    TeamCode::parse(fragment)
}

impl TeamState {
    /// Rebuild a team from a code, skipping tokens that cannot be added
    ///
    /// Unknown slugs, items outside the title's dex, duplicates, giant tokens
    /// for items without a giant form and tokens past a full team are dropped
    /// individually; the remaining tokens keep their order. A code for another
    /// title yields an empty team for the roster's title.
    pub fn from_code(code: &TeamCode, roster: &impl RosterLookup) -> Self {
        let mut team = TeamState::new(roster.title_slug());
        if code.title != roster.title_slug() {
            debug!(
                code_title = %code.title,
                roster_title = roster.title_slug(),
                "Ignoring team code for another title"
            );
            return team;
        }

        for token in &code.items {
            let Some(id) = roster.resolve_slug(&token.slug) else {
                debug!(slug = %token.slug, "Skipping unknown item token");
                continue;
            };
            if let Err(e) = team.add(id, token.giant, roster) {
                debug!(slug = %token.slug, error = %e, "Skipping item token");
            }
        }

        team
    }
}
