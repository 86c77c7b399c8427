use serde::{Deserialize, Deserializer, Serialize};

/// A scored program returned by the recommendation service.
///
/// Every field may be missing from the service response; absent fields are
/// left to the views to substitute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Opportunities the program opens, in service order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub opportunities: Vec<String>,

    #[serde(default)]
    pub access_conditions: Option<String>,

    /// Relevance score as computed by the service.
    #[serde(default)]
    pub score: Option<f64>,
}

impl Recommendation {
    /// Create a recommendation with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
