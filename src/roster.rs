use urlencoding::{decode, encode};

/// Avatar initials from an email (or name-like) string.
///
/// The local part is split on `.`, `_` and `-`; two or more tokens give the
/// first letters of the first two, a single token gives its first letter.
pub fn initials(s: &str) -> String {
    let local = s.split('@').next().unwrap_or_default();
    let mut tokens = local
        .split(|c: char| matches!(c, '.' | '_' | '-') || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let first_letter = |t: &str| t.chars().next().map(|c| c.to_uppercase().collect::<String>());

    match (tokens.next(), tokens.next()) {
        (None, _) => "?".to_string(),
        (Some(a), None) => first_letter(a).unwrap_or_else(|| "?".to_string()),
        (Some(a), Some(b)) => {
            let mut out = first_letter(a).unwrap_or_default();
            out.push_str(&first_letter(b).unwrap_or_default());
            out
        }
    }
}

/// The slice of a roster that gets rendered, plus how many were left out.
#[derive(Debug, PartialEq)]
pub struct RosterWindow<'a> {
    pub visible: &'a [String],
    pub hidden: usize,
}

impl<'a> RosterWindow<'a> {
    pub fn new(participants: &'a [String], cap: usize) -> Self {
        let shown = participants.len().min(cap);
        Self {
            visible: &participants[..shown],
            hidden: participants.len() - shown,
        }
    }

    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

/// Identifies one participant row for a removal request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

impl RemovalTarget {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// `(data-email, data-activity)` attribute values for the row.
    pub fn encoded(&self) -> (String, String) {
        (encode(&self.email).into_owned(), encode(&self.activity).into_owned())
    }

    /// Recovers a target from a row's data attributes. Missing, empty or
    /// undecodable values yield `None`.
    pub fn from_encoded(email: Option<&str>, activity: Option<&str>) -> Option<Self> {
        let email = decode(email?).ok()?.into_owned();
        let activity = decode(activity?).ok()?.into_owned();
        if email.is_empty() || activity.is_empty() {
            return None;
        }
        Some(Self { activity, email })
    }
}
