use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How involved a loader's definition is. Ordinal for filtering only;
/// never used as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Complexity::Simple),
            "medium" => Ok(Complexity::Medium),
            "complex" => Ok(Complexity::Complex),
            other => Err(format!("Unknown complexity: {}", other)),
        }
    }
}

impl FromStr for SizeClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xs" => Ok(SizeClass::Xs),
            "sm" => Ok(SizeClass::Sm),
            "md" => Ok(SizeClass::Md),
            "lg" => Ok(SizeClass::Lg),
            "xl" => Ok(SizeClass::Xl),
            other => Err(format!("Unknown size: {}", other)),
        }
    }
}

impl FromStr for Speed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(Speed::Slow),
            "normal" => Ok(Speed::Normal),
            "fast" => Ok(Speed::Fast),
            other => Err(format!("Unknown speed: {}", other)),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::Complex => write!(f, "complex"),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeClass::Xs => write!(f, "xs"),
            SizeClass::Sm => write!(f, "sm"),
            SizeClass::Md => write!(f, "md"),
            SizeClass::Lg => write!(f, "lg"),
            SizeClass::Xl => write!(f, "xl"),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speed::Slow => write!(f, "slow"),
            Speed::Normal => write!(f, "normal"),
            Speed::Fast => write!(f, "fast"),
        }
    }
}

/// One catalog entry describing a single animated loading indicator and its
/// renderable definition. Immutable once created; the markup/style/script
/// blobs are opaque text the library stores and passes through unparsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderRecord {
    pub id: String,
    pub name: String,
    // Open set: new categories may appear in data without code changes
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub markup: String,
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    pub complexity: Complexity,
    pub size: SizeClass,
    pub speed: Speed,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub likes: u64,
    // Date text ("%Y-%m-%d"); parsed only when sorting by creation date
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_enum_values() {
        assert_eq!("simple".parse::<Complexity>(), Ok(Complexity::Simple));
        assert_eq!("xl".parse::<SizeClass>(), Ok(SizeClass::Xl));
        assert_eq!("fast".parse::<Speed>(), Ok(Speed::Fast));
    }

    #[test]
    fn rejects_unknown_enum_values() {
        assert!("gigantic".parse::<SizeClass>().is_err());
        assert!("".parse::<Complexity>().is_err());
        assert!("warp".parse::<Speed>().is_err());
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for c in [Complexity::Simple, Complexity::Medium, Complexity::Complex] {
            assert_eq!(c.to_string().parse::<Complexity>(), Ok(c));
        }
    }

    #[test]
    fn record_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "spin-1",
            "name": "Spin",
            "category": "spinners",
            "markup": "<div class=\"spin\"></div>",
            "style": ".spin { animation: spin 1s linear infinite; }",
            "complexity": "simple",
            "size": "md",
            "speed": "normal",
            "created_at": "2024-01-01"
        }"#;
        let record: LoaderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "spin-1");
        assert!(record.script.is_none());
        assert!(record.tags.is_empty());
        assert_eq!(record.downloads, 0);
    }
}
