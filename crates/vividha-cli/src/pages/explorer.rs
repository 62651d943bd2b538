//! Art Explorer page: deep-dive view of a single art form.

use serde::Serialize;

use vividha::model::DEFAULT_AGE_YEARS;
use vividha::{ArtAsset, CulturalRecord, DataSource, Dataset, Result, Session, VividhaError};

/// Technique labels scored for the complexity radar.
const TECHNIQUES: [&str; 5] = [
    "Line work with natural brushes",
    "Natural pigment preparation",
    "Traditional motif creation",
    "Pattern repetition methods",
    "Border decoration techniques",
];

/// How many related art forms to suggest.
const RELATED_COUNT: usize = 3;

#[derive(Debug, Serialize)]
pub struct ExplorerView {
    /// All selectable art forms, in dataset order.
    pub art_forms: Vec<String>,
    /// The art form this view describes.
    pub selected: String,
    pub profile: ArtProfile,
    pub timeline: Vec<TimelineEntry>,
    pub techniques: Vec<TechniqueScore>,
    pub related: Vec<RelatedArt>,
}

/// Cultural record joined with its presentation asset.
#[derive(Debug, Serialize)]
pub struct ArtProfile {
    pub art_form: String,
    pub region: String,
    pub image_url: String,
    pub description: String,
    pub cultural_value: String,
    pub tourism_visibility: Option<i64>,
    pub preservation_status: String,
}

#[derive(Debug, Serialize)]
pub struct TimelineEntry {
    pub period: String,
    pub event: String,
}

#[derive(Debug, Serialize)]
pub struct TechniqueScore {
    pub technique: String,
    pub complexity: u8,
}

#[derive(Debug, Serialize)]
pub struct RelatedArt {
    pub art_form: String,
    pub region: String,
    pub image_url: String,
    pub summary: String,
}

/// Build the explorer view.
///
/// Selection precedence: the explicit request, then the session's remembered
/// choice, then the first art form. The resolved selection is written back to
/// the session so it survives page changes.
pub fn build(
    source: &dyn DataSource,
    session: &mut Session,
    requested: Option<&str>,
) -> Result<ExplorerView> {
    let (cultural, _) = source.load(Dataset::Cultural)?;
    if cultural.row_count() == 0 {
        return Err(VividhaError::EmptyData(
            "no cultural data available".to_string(),
        ));
    }

    // Assets are optional; a load failure degrades to placeholders
    let assets = source.load(Dataset::ArtAssets).ok().map(|(t, _)| t);

    let art_forms = match &assets {
        Some(table) if table.column_index("art_form").is_some() => {
            table.distinct_values("art_form")
        }
        _ => cultural.distinct_values("art_form"),
    };
    if art_forms.is_empty() {
        return Err(VividhaError::EmptyData(
            "no art forms in the cultural data".to_string(),
        ));
    }

    let selected = requested
        .filter(|art| art_forms.iter().any(|a| a == art))
        .map(str::to_string)
        .or_else(|| {
            session
                .selected_art()
                .filter(|art| art_forms.iter().any(|a| a == art))
        })
        .unwrap_or_else(|| art_forms[0].clone());
    session.set_selected_art(&selected);

    let record = CulturalRecord::find(&cultural, &selected);
    let asset = ArtAsset::find_or_placeholder(assets.as_ref(), &selected);

    // Asset region wins; the cultural row fills a placeholder region
    let region = if asset.region == vividha::model::PLACEHOLDER_REGION {
        record
            .as_ref()
            .map(|r| r.region.clone())
            .unwrap_or(asset.region.clone())
    } else {
        asset.region.clone()
    };

    let profile = ArtProfile {
        art_form: selected.clone(),
        region,
        image_url: asset.image_url,
        description: asset.description,
        cultural_value: record
            .as_ref()
            .map(|r| r.cultural_value.clone())
            .unwrap_or_else(|| vividha::model::NOT_AVAILABLE.to_string()),
        tourism_visibility: record.as_ref().and_then(|r| r.tourism_visibility),
        preservation_status: record
            .as_ref()
            .map(|r| r.preservation_status.clone())
            .unwrap_or_else(|| vividha::model::NOT_AVAILABLE.to_string()),
    };

    let age = record
        .as_ref()
        .map(|r| r.approx_age_years())
        .unwrap_or(DEFAULT_AGE_YEARS);

    Ok(ExplorerView {
        timeline: timeline_for(age),
        techniques: technique_scores(),
        related: related_sample(&art_forms, &selected, assets.as_ref(), &cultural),
        art_forms,
        selected,
        profile,
    })
}

/// Historical evolution anchored on the art form's approximate age.
fn timeline_for(age_years: i64) -> Vec<TimelineEntry> {
    let entry = |period: String, event: &str| TimelineEntry {
        period,
        event: event.to_string(),
    };

    vec![
        entry(
            format!("{} CE", age_years - 500),
            "Early origins in religious and ritual contexts",
        ),
        entry(
            format!("{} CE", age_years - 300),
            "Development of distinctive style and techniques",
        ),
        entry(
            format!("{} CE", age_years - 100),
            "Patronage by local rulers and elite families",
        ),
        entry("1800s".to_string(), "Decline during colonial period"),
        entry("1950s".to_string(), "Post-independence revival efforts"),
        entry(
            "1980s".to_string(),
            "Recognition as important cultural heritage",
        ),
        entry(
            "2000s".to_string(),
            "Adaptation to contemporary markets and materials",
        ),
        entry(
            "Present".to_string(),
            "Continuing evolution with growing international interest",
        ),
    ]
}

/// Lightly randomized complexity per technique, 60–95.
fn technique_scores() -> Vec<TechniqueScore> {
    TECHNIQUES
        .iter()
        .map(|technique| TechniqueScore {
            technique: technique.to_string(),
            complexity: fastrand::u8(60..=95),
        })
        .collect()
}

/// A random sample of up to three other art forms.
fn related_sample(
    art_forms: &[String],
    selected: &str,
    assets: Option<&vividha::DataTable>,
    cultural: &vividha::DataTable,
) -> Vec<RelatedArt> {
    let mut pool: Vec<&String> = art_forms.iter().filter(|a| *a != selected).collect();
    fastrand::shuffle(&mut pool);

    pool.into_iter()
        .take(RELATED_COUNT)
        .map(|art| {
            let asset = ArtAsset::find_or_placeholder(assets, art);
            let record = CulturalRecord::find(cultural, art);
            let region = if asset.region == vividha::model::PLACEHOLDER_REGION {
                record.map(|r| r.region).unwrap_or(asset.region.clone())
            } else {
                asset.region.clone()
            };

            let summary: String = if asset.description.chars().count() > 100 {
                let head: String = asset.description.chars().take(100).collect();
                format!("{}...", head)
            } else {
                asset.description.clone()
            };

            RelatedArt {
                art_form: art.clone(),
                region,
                image_url: asset.image_url,
                summary,
            }
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
        let mut cultural = std::fs::File::create(Dataset::Cultural.path(dir.path())).unwrap();
        write!(
            cultural,
            "art_form,region,cultural_value,tourism_visibility,preservation_status,age\n\
             Madhubani,Bihar,Folk Painting,80,Thriving,\"2,500+ years\"\n\
             Warli,Maharashtra,Tribal Art,40,At Risk,3000 years\n\
             Gond,Madhya Pradesh,Tribal Art,55,Stable,\n"
        )
        .unwrap();
        let mut assets = std::fs::File::create(Dataset::ArtAssets.path(dir.path())).unwrap();
        write!(
            assets,
            "art_form,image_url,description,region\n\
             Madhubani,https://example.org/m.jpg,Wall art from Mithila.,Bihar\n"
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_selection_precedence_and_session_writeback() {
        let dir = seed_dir();
        let source = LocalFiles::new(dir.path());
        let mut session = Session::new();

        // Assets list only Madhubani, so it is the default selection
        let view = build(&source, &mut session, None).unwrap();
        assert_eq!(view.selected, "Madhubani");
        assert_eq!(session.selected_art().as_deref(), Some("Madhubani"));

        // An unknown request falls back to the session's choice
        let view = build(&source, &mut session, Some("Nonexistent")).unwrap();
        assert_eq!(view.selected, "Madhubani");
    }

    #[test]
    fn test_profile_joins_asset_and_record() {
        let dir = seed_dir();
        let source = LocalFiles::new(dir.path());
        let mut session = Session::new();

        let view = build(&source, &mut session, Some("Madhubani")).unwrap();
        assert_eq!(view.profile.image_url, "https://example.org/m.jpg");
        assert_eq!(view.profile.region, "Bihar");
        assert_eq!(view.profile.tourism_visibility, Some(80));
    }

    #[test]
    fn test_timeline_anchors_on_age() {
        let timeline = timeline_for(2500);
        assert_eq!(timeline[0].period, "2000 CE");
        assert_eq!(timeline.len(), 8);
    }

    #[test]
    fn test_technique_scores_in_range() {
        for score in technique_scores() {
            assert!((60..=95).contains(&score.complexity));
        }
    }

    #[test]
    fn test_missing_assets_degrade_to_placeholders() {
        let dir = seed_dir();
        std::fs::remove_file(Dataset::ArtAssets.path(dir.path())).unwrap();
        let source = LocalFiles::new(dir.path());
        let mut session = Session::new();

        let view = build(&source, &mut session, Some("Warli")).unwrap();
        assert_eq!(view.profile.image_url, vividha::model::PLACEHOLDER_IMAGE);
        // Region still comes from the cultural row
        assert_eq!(view.profile.region, "Maharashtra");
    }
}
