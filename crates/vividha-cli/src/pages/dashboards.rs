//! Responsible Tourism page: impact, practices, sustainability, community.

use indexmap::IndexMap;
use serde::Serialize;

use vividha::{DataSource, DataTable, Dataset, Result};

#[derive(Debug, Serialize)]
pub struct DashboardsView {
    pub impact: ImpactAnalysis,
    pub practices: Vec<PracticeScore>,
    pub sustainability: Vec<RegionIndicators>,
    pub economics: Vec<EconomicsYear>,
    pub benefits: Vec<BenefitShare>,
}

/// Impact scores split by direction.
#[derive(Debug, Serialize)]
pub struct ImpactAnalysis {
    pub positive: Vec<ImpactScore>,
    pub negative: Vec<ImpactScore>,
}

#[derive(Debug, Serialize)]
pub struct ImpactScore {
    pub category: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct PracticeScore {
    pub practice: String,
    pub score: f64,
}

/// Sustainability indicators for one region, in file column order.
#[derive(Debug, Serialize)]
pub struct RegionIndicators {
    pub region: String,
    pub indicators: IndexMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub struct EconomicsYear {
    pub year: String,
    pub community_revenue: f64,
    pub corporate_revenue: f64,
    pub artisan_income: f64,
}

#[derive(Debug, Serialize)]
pub struct BenefitShare {
    pub benefit: String,
    pub percent: f64,
}

/// Build the dashboards view from the five tourism metric datasets.
pub fn build(source: &dyn DataSource) -> Result<DashboardsView> {
    let (impact_table, _) = source.load(Dataset::TourismImpact)?;
    let (practices_table, _) = source.load(Dataset::TourismPractices)?;
    let (sustainability_table, _) = source.load(Dataset::TourismSustainability)?;
    let (economics_table, _) = source.load(Dataset::TourismEconomics)?;
    let (benefits_table, _) = source.load(Dataset::TourismBenefits)?;

    Ok(DashboardsView {
        impact: impact_analysis(&impact_table),
        practices: practice_scores(&practices_table),
        sustainability: sustainability_by_region(&sustainability_table),
        economics: economics_series(&economics_table),
        benefits: benefit_shares(&benefits_table),
    })
}

fn number(table: &DataTable, row: usize, column: &str) -> Option<f64> {
    table
        .value(row, column)
        .and_then(|v| v.trim().parse().ok())
}

fn impact_analysis(table: &DataTable) -> ImpactAnalysis {
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for row in 0..table.row_count() {
        let (Some(kind), Some(category), Some(score)) = (
            table.value(row, "impact_type"),
            table.value(row, "category"),
            number(table, row, "score"),
        ) else {
            continue;
        };

        let entry = ImpactScore {
            category: category.to_string(),
            score,
        };
        match kind {
            "positive" => positive.push(entry),
            "negative" => negative.push(entry),
            _ => {}
        }
    }

    ImpactAnalysis { positive, negative }
}

fn practice_scores(table: &DataTable) -> Vec<PracticeScore> {
    (0..table.row_count())
        .filter_map(|row| {
            Some(PracticeScore {
                practice: table.value(row, "practice")?.to_string(),
                score: number(table, row, "score")?,
            })
        })
        .collect()
}

/// One entry per region; every numeric column becomes an indicator, in
/// header order.
fn sustainability_by_region(table: &DataTable) -> Vec<RegionIndicators> {
    (0..table.row_count())
        .filter_map(|row| {
            let region = table.value(row, "region")?.to_string();
            let indicators = table
                .headers
                .iter()
                .filter(|h| h.as_str() != "region")
                .filter_map(|h| Some((h.clone(), number(table, row, h)?)))
                .collect();
            Some(RegionIndicators { region, indicators })
        })
        .collect()
}

fn economics_series(table: &DataTable) -> Vec<EconomicsYear> {
    (0..table.row_count())
        .filter_map(|row| {
            Some(EconomicsYear {
                year: table.value(row, "year")?.to_string(),
                community_revenue: number(table, row, "community_revenue")?,
                corporate_revenue: number(table, row, "corporate_revenue")?,
                artisan_income: number(table, row, "artisan_income")?,
            })
        })
        .collect()
}

fn benefit_shares(table: &DataTable) -> Vec<BenefitShare> {
    (0..table.row_count())
        .filter_map(|row| {
            Some(BenefitShare {
                benefit: table.value(row, "benefit")?.to_string(),
                percent: number(table, row, "percent")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vividha::LocalFiles;

    fn seed_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let files: [(Dataset, &str); 5] = [
            (
                Dataset::TourismImpact,
                "impact_type,category,score\n\
                 positive,Craft Revival,78\n\
                 positive,Heritage Funding,65\n\
                 negative,Site Degradation,58\n",
            ),
            (
                Dataset::TourismPractices,
                "practice,score\n\
                 Local Guides,82\n\
                 Direct Purchases,75\n",
            ),
            (
                Dataset::TourismSustainability,
                "region,waste_management,local_employment\n\
                 Bihar,62,71\n\
                 Kerala,84,79\n",
            ),
            (
                Dataset::TourismEconomics,
                "year,community_revenue,corporate_revenue,artisan_income\n\
                 2022,140,310,4.1\n\
                 2023,165,335,4.6\n",
            ),
            (
                Dataset::TourismBenefits,
                "benefit,percent\n\
                 Artisan Income,35\n\
                 Local Employment,25\n",
            ),
        ];
        for (dataset, content) in files {
            let mut file = std::fs::File::create(dataset.path(dir.path())).unwrap();
            write!(file, "{}", content).unwrap();
        }
        dir
    }

    #[test]
    fn test_build_dashboards() {
        let dir = seed_dir();
        let source = LocalFiles::new(dir.path());
        let view = build(&source).unwrap();

        assert_eq!(view.impact.positive.len(), 2);
        assert_eq!(view.impact.negative.len(), 1);
        assert_eq!(view.practices.len(), 2);
        assert_eq!(view.economics.len(), 2);
        assert_eq!(view.benefits.len(), 2);
    }

    #[test]
    fn test_sustainability_preserves_column_order() {
        let dir = seed_dir();
        let source = LocalFiles::new(dir.path());
        let view = build(&source).unwrap();

        assert_eq!(view.sustainability.len(), 2);
        let keys: Vec<&String> = view.sustainability[0].indicators.keys().collect();
        assert_eq!(keys, vec!["waste_management", "local_employment"]);
    }

    #[test]
    fn test_missing_dataset_fails_the_page() {
        let dir = seed_dir();
        std::fs::remove_file(Dataset::TourismBenefits.path(dir.path())).unwrap();
        let source = LocalFiles::new(dir.path());
        assert!(build(&source).is_err());
    }
}
