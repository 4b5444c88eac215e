use crate::domain::model::{DataPoint, HighlightReport, HighlightedNode, RangeSelection};
use crate::domain::node::SifNode;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SelectError};
use chrono::Utc;

pub fn load_data_points<S: Storage>(storage: &S, path: &str) -> Result<Vec<DataPoint>> {
    let bytes = storage.read_file(path)?;
    let points: Vec<DataPoint> = serde_json::from_slice(&bytes)?;

    if points.is_empty() {
        return Err(SelectError::EmptyDataset);
    }

    tracing::debug!("Loaded {} data points from {}", points.len(), path);
    Ok(points)
}

/// Apply a confirmed selection to the data set and describe every matched
/// element the way the canvas would paint it.
pub fn build_report(
    session: &str,
    points: &[DataPoint],
    selection: &RangeSelection,
) -> HighlightReport {
    let matched: Vec<HighlightedNode> = points
        .iter()
        .filter(|point| selection.contains(point.value))
        .map(|point| {
            let node = SifNode::new(point.id.clone(), point.name.clone());
            HighlightedNode {
                id: point.id.clone(),
                name: node.text().to_string(),
                value: point.value,
                color: node.color().to_hex(),
                tooltip: node.tooltip().to_string(),
            }
        })
        .collect();

    HighlightReport {
        session: session.to_string(),
        created_at: Utc::now(),
        range: *selection,
        matched_count: matched.len(),
        total: points.len(),
        matched,
    }
}

pub fn write_report<S: Storage>(storage: &S, path: &str, report: &HighlightReport) -> Result<()> {
    let json = serde_json::to_vec_pretty(report)?;
    storage.write_file(path, &json)?;
    tracing::info!(
        "Wrote highlight report: {}/{} elements matched",
        report.matched_count,
        report.total
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<DataPoint> {
        vec![
            DataPoint {
                id: "n1".to_string(),
                name: Some("TP53".to_string()),
                value: 1.5,
            },
            DataPoint {
                id: "n2".to_string(),
                name: None,
                value: 7.0,
            },
            DataPoint {
                id: "n3".to_string(),
                name: Some("MDM2".to_string()),
                value: -4.0,
            },
        ]
    }

    #[test]
    fn test_report_filters_by_range() {
        let selection = RangeSelection { min: 0.0, max: 5.0 };
        let report = build_report("demo", &points(), &selection);

        assert_eq!(report.matched_count, 1);
        assert_eq!(report.total, 3);
        assert_eq!(report.matched[0].id, "n1");
        assert_eq!(report.matched[0].name, "TP53");
    }

    #[test]
    fn test_unbounded_side_matches_everything_below() {
        let selection = RangeSelection {
            min: RangeSelection::UNBOUNDED_MIN,
            max: 2.0,
        };
        let report = build_report("demo", &points(), &selection);

        let ids: Vec<&str> = report.matched.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n3"]);
    }

    #[test]
    fn test_unnamed_points_fall_back_to_id() {
        let selection = RangeSelection {
            min: RangeSelection::UNBOUNDED_MIN,
            max: RangeSelection::UNBOUNDED_MAX,
        };
        let report = build_report("demo", &points(), &selection);

        let n2 = report.matched.iter().find(|n| n.id == "n2").unwrap();
        assert_eq!(n2.name, "n2");
        assert_eq!(n2.tooltip, "n2");
        assert!(n2.color.starts_with('#'));
        assert_eq!(n2.color.len(), 7);
    }
}
