//! Logical dataset identifiers and their fixed file locations.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A named dataset, mapped to a fixed file under the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    /// Art forms with region, category, visibility and preservation status.
    Cultural,
    /// Images and descriptions joined to cultural records by art form.
    ArtAssets,
    /// Monitored heritage sites with status and threat level.
    HeritageSites,
    /// Positive/negative tourism impact scores by category.
    TourismImpact,
    /// Responsible-practice impact scores.
    TourismPractices,
    /// Sustainability indicators by region.
    TourismSustainability,
    /// Community economics time series.
    TourismEconomics,
    /// Community benefit shares.
    TourismBenefits,
    /// User-submitted artifacts; created lazily on first submission.
    ArtifactRegistry,
}

impl Dataset {
    /// Every dataset, in catalog order.
    pub const ALL: [Dataset; 9] = [
        Dataset::Cultural,
        Dataset::ArtAssets,
        Dataset::HeritageSites,
        Dataset::TourismImpact,
        Dataset::TourismPractices,
        Dataset::TourismSustainability,
        Dataset::TourismEconomics,
        Dataset::TourismBenefits,
        Dataset::ArtifactRegistry,
    ];

    /// Fixed file name under the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Cultural => "cultural_data.csv",
            Dataset::ArtAssets => "art_forms.csv",
            Dataset::HeritageSites => "heritage_sites.csv",
            Dataset::TourismImpact => "tourism_impact_metrics.csv",
            Dataset::TourismPractices => "tourism_practices_metrics.csv",
            Dataset::TourismSustainability => "tourism_sustainability_indicators.csv",
            Dataset::TourismEconomics => "tourism_community_economics.csv",
            Dataset::TourismBenefits => "tourism_community_benefits.csv",
            Dataset::ArtifactRegistry => "artifact_registry.csv",
        }
    }

    /// Full path of the dataset file under `data_dir`.
    pub fn path(self, data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(self.file_name())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::Cultural => "cultural",
            Dataset::ArtAssets => "art-assets",
            Dataset::HeritageSites => "heritage-sites",
            Dataset::TourismImpact => "tourism-impact",
            Dataset::TourismPractices => "tourism-practices",
            Dataset::TourismSustainability => "tourism-sustainability",
            Dataset::TourismEconomics => "tourism-economics",
            Dataset::TourismBenefits => "tourism-benefits",
            Dataset::ArtifactRegistry => "artifact-registry",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "cultural" | "cultural-data" => Ok(Dataset::Cultural),
            "art-assets" | "art-forms" => Ok(Dataset::ArtAssets),
            "heritage-sites" | "heritage" => Ok(Dataset::HeritageSites),
            "tourism-impact" | "impact" => Ok(Dataset::TourismImpact),
            "tourism-practices" | "practices" => Ok(Dataset::TourismPractices),
            "tourism-sustainability" | "sustainability" => Ok(Dataset::TourismSustainability),
            "tourism-economics" | "economics" => Ok(Dataset::TourismEconomics),
            "tourism-benefits" | "benefits" => Ok(Dataset::TourismBenefits),
            "artifact-registry" | "registry" => Ok(Dataset::ArtifactRegistry),
            _ => Err(format!(
                "Unknown dataset: {}. Use one of: cultural, art-assets, heritage-sites, \
                 tourism-impact, tourism-practices, tourism-sustainability, \
                 tourism-economics, tourism-benefits, artifact-registry.",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_from_str_roundtrip() {
        for dataset in Dataset::ALL {
            let parsed = Dataset::from_str(&dataset.to_string()).unwrap();
            assert_eq!(parsed, dataset);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Dataset::from_str("registry").unwrap(), Dataset::ArtifactRegistry);
        assert_eq!(Dataset::from_str("art_forms").unwrap(), Dataset::ArtAssets);
        assert!(Dataset::from_str("bogus").is_err());
    }

    #[test]
    fn test_path() {
        assert_eq!(
            Dataset::Cultural.path("data").to_string_lossy(),
            "data/cultural_data.csv"
        );
    }
}
