//! rk_alert - Alert model and demo feed for Rakshak
//!
//! This crate provides:
//! - Severity and hazard taxonomies
//! - The Alert record shape shared by screens and widgets
//! - The hardcoded demo feed standing in for backend alert ingestion

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Alert errors
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Feed parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Alert severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Badge text shown on alert cards
    pub fn badge(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hazard categories the feed can carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Earthquake,
    Flood,
    Fire,
    Storm,
    Other,
}

impl HazardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardKind::Earthquake => "earthquake",
            HazardKind::Flood => "flood",
            HazardKind::Fire => "fire",
            HazardKind::Storm => "storm",
            HazardKind::Other => "other",
        }
    }
}

impl std::str::FromStr for HazardKind {
    type Err = std::convert::Infallible;

    /// Unrecognized hazard labels fold into `Other`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "earthquake" => HazardKind::Earthquake,
            "flood" => HazardKind::Flood,
            "fire" => HazardKind::Fire,
            "storm" => HazardKind::Storm,
            _ => HazardKind::Other,
        })
    }
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// An active alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: HazardKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub distance_km: f64,
    pub issued_at: DateTime<Utc>,
    pub source: String,
    pub coordinates: Coordinates,
}

/// A batch of alerts scoped to the user's area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertFeed {
    pub location_name: String,
    pub user_location: Coordinates,
    pub alerts: Vec<Alert>,
}

impl AlertFeed {
    /// Parse a feed from JSON
    pub fn from_json(raw: &str) -> Result<Self, AlertError> {
        let feed: AlertFeed = serde_json::from_str(raw)?;
        tracing::debug!(alerts = feed.alerts.len(), "parsed alert feed");
        Ok(feed)
    }

    /// The hardcoded demo feed
    pub fn demo() -> Self {
        Self {
            location_name: "San Francisco, CA".to_string(),
            user_location: Coordinates {
                lat: 37.7749,
                lng: -122.4194,
            },
            alerts: vec![
                Alert {
                    id: "1".to_string(),
                    kind: HazardKind::Earthquake,
                    severity: Severity::High,
                    title: "Earthquake Alert".to_string(),
                    description: "Magnitude 6.2 earthquake detected 15km from your location"
                        .to_string(),
                    distance_km: 15.0,
                    issued_at: Utc::now() - Duration::minutes(2),
                    source: "USGS".to_string(),
                    coordinates: Coordinates {
                        lat: 37.7749,
                        lng: -122.4194,
                    },
                },
                Alert {
                    id: "2".to_string(),
                    kind: HazardKind::Flood,
                    severity: Severity::Medium,
                    title: "Flood Warning".to_string(),
                    description: "Heavy rainfall causing flash floods in downtown area"
                        .to_string(),
                    distance_km: 8.0,
                    issued_at: Utc::now() - Duration::minutes(15),
                    source: "National Weather Service".to_string(),
                    coordinates: Coordinates {
                        lat: 37.7849,
                        lng: -122.4094,
                    },
                },
            ],
        }
    }

    /// Number of active alerts
    pub fn active_count(&self) -> usize {
        self.alerts.len()
    }

    /// Highest severity present, if any alerts are active
    pub fn highest_severity(&self) -> Option<Severity> {
        self.alerts.iter().map(|a| a.severity).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_severity_roundtrip() {
        for severity in [
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ] {
            let parsed: Severity = severity.as_str().parse().unwrap();
            assert_eq!(parsed, severity);
        }
        assert!("extreme".parse::<Severity>().is_err());
    }

    #[test]
    fn test_hazard_kind_unknown_folds_to_other() {
        let kind: HazardKind = "tsunami".parse().unwrap();
        assert_eq!(kind, HazardKind::Other);
        let known: HazardKind = "Flood".parse().unwrap();
        assert_eq!(known, HazardKind::Flood);
    }

    #[test]
    fn test_demo_feed() {
        let feed = AlertFeed::demo();
        assert_eq!(feed.active_count(), 2);
        assert_eq!(feed.location_name, "San Francisco, CA");
        assert_eq!(feed.alerts[0].kind, HazardKind::Earthquake);
        assert_eq!(feed.alerts[0].severity, Severity::High);
        assert_eq!(feed.alerts[0].source, "USGS");
        assert_eq!(feed.alerts[1].kind, HazardKind::Flood);
        assert_eq!(feed.alerts[1].severity, Severity::Medium);
    }

    #[test]
    fn test_highest_severity() {
        let feed = AlertFeed::demo();
        assert_eq!(feed.highest_severity(), Some(Severity::High));

        let empty = AlertFeed {
            location_name: String::new(),
            user_location: Coordinates { lat: 0.0, lng: 0.0 },
            alerts: vec![],
        };
        assert_eq!(empty.highest_severity(), None);
    }

    #[test]
    fn test_feed_json_roundtrip() {
        let feed = AlertFeed::demo();
        let raw = serde_json::to_string(&feed).unwrap();
        let parsed = AlertFeed::from_json(&raw).unwrap();
        assert_eq!(parsed.active_count(), 2);
        assert_eq!(parsed.alerts[0].title, "Earthquake Alert");
        assert!((parsed.alerts[1].distance_km - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_feed_rejects_malformed_json() {
        assert!(AlertFeed::from_json("{not json").is_err());
    }
}
