//! Participants (the exhibit owner and invited collaborators) and the
//! explicitly injected session context.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::id::RawId;

/// Opaque participant id, canonicalized to its string form.
///
/// The marketplace API emits the same user id as a JSON number in one
/// payload and a JSON string in the next; normalizing once at construction
/// keeps every later comparison a plain equality instead of a coercion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for ParticipantId {
    fn from(raw: RawId) -> Self {
        Self(raw.into_canonical())
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ParticipantId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user taking part in an exhibit, owner or collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    // older exhibit payloads say "name" where the user API says "first_name"
    #[serde(alias = "name")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, first_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            avatar: None,
        }
    }
}

/// The authenticated user's context, passed explicitly to everything that
/// needs to know who is acting. There is no ambient current-user state.
#[derive(Debug, Clone)]
pub struct Session {
    user: Participant,
}

impl Session {
    pub fn new(user: Participant) -> Self {
        Self { user }
    }

    #[must_use]
    pub fn user(&self) -> &Participant {
        &self.user
    }

    #[must_use]
    pub fn user_id(&self) -> &ParticipantId {
        &self.user.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_normalize_to_the_same_value() {
        let from_number: ParticipantId = serde_json::from_str("201").unwrap();
        let from_string: ParticipantId = serde_json::from_str("\"201\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "201");
    }

    #[test]
    fn id_serializes_as_its_canonical_string() {
        let id = ParticipantId::from(100_u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"100\"");
    }

    #[test]
    fn participant_accepts_the_older_name_field() {
        let participant: Participant =
            serde_json::from_str(r#"{"id": 201, "name": "Jane", "avatar": "jane.png"}"#).unwrap();
        assert_eq!(participant.first_name, "Jane");
        assert_eq!(participant.id, ParticipantId::from(201_u64));
    }

    #[test]
    fn session_exposes_the_injected_user() {
        let session = Session::new(Participant::new("u1", "Mara"));
        assert_eq!(session.user_id(), &ParticipantId::from("u1"));
        assert_eq!(session.user().first_name, "Mara");
    }
}
