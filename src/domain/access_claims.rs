use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>, // Subject (user ID)
    pub role: String, // Role tag, e.g. "user" or "admin"
    pub exp: i64,     // Expiration time
}

// The gate never reads the subject, so an id of another shape is dropped
// instead of failing the whole token.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i64),
        Other(IgnoredAny),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Number(id) => Some(id),
        Id::Other(_) => None,
    })
}
