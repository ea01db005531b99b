// src/types/signal.rs
use serde::{Deserialize, Serialize};

use super::UserId;

/// A value attached to a key user by the indexing stage.
///
/// Polarity lives in the variant, so any string is a valid id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum Signal {
    /// The key user is followed by the carried user.
    Mention(UserId),
    /// The key user directly follows the carried user.
    DirectMark(UserId),
}

/// A value grouped under a recommender by the candidate stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CandidateItem {
    /// One shared followee between the key user and the carried user.
    Candidate(UserId),
    /// The key user already follows the carried user.
    DirectMark(UserId),
}

/// All signals grouped under one user. This is the persisted index record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedList {
    pub user: UserId,
    pub signals: Vec<Signal>,
}

impl InvertedList {
    #[must_use]
    pub fn new(user: UserId, signals: Vec<Signal>) -> Self {
        Self { user, signals }
    }

    /// Users who follow `user`.
    pub fn followers(&self) -> impl Iterator<Item = &UserId> {
        self.signals.iter().filter_map(|s| match s {
            Signal::Mention(of) => Some(of),
            Signal::DirectMark(_) => None,
        })
    }

    /// Users that `user` follows.
    pub fn followees(&self) -> impl Iterator<Item = &UserId> {
        self.signals.iter().filter_map(|s| match s {
            Signal::DirectMark(of) => Some(of),
            Signal::Mention(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_json_keeps_polarity() {
        let mention = Signal::Mention(UserId::from("-5"));
        let json = serde_json::to_string(&mention).unwrap_or_default();
        assert_eq!(json, r#"{"kind":"mention","of":"-5"}"#);

        let back: Signal = serde_json::from_str(&json).unwrap_or(Signal::DirectMark("x".into()));
        assert_eq!(back, mention);
    }

    #[test]
    fn test_inverted_list_partitions_signals() {
        let list = InvertedList::new(
            "1".into(),
            vec![
                Signal::DirectMark("5".into()),
                Signal::Mention("2".into()),
                Signal::DirectMark("3".into()),
            ],
        );
        let followers: Vec<&str> = list.followers().map(UserId::as_str).collect();
        let followees: Vec<&str> = list.followees().map(UserId::as_str).collect();
        assert_eq!(followers, ["2"]);
        assert_eq!(followees, ["5", "3"]);
    }
}
