//! Common test utilities for rakshak integration tests.
//!
//! This module provides:
//! - Tracing initialization for test output
//! - JSON fixtures matching the demo feed and message log shapes

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize tracing once for integration tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    });
}

// =============================================================================
// JSON Fixtures
// =============================================================================

/// Sample alert feed as a backend would deliver it
pub const ALERT_FEED_FIXTURE: &str = r#"{
    "location_name": "San Francisco, CA",
    "user_location": { "lat": 37.7749, "lng": -122.4194 },
    "alerts": [
        {
            "id": "1",
            "kind": "earthquake",
            "severity": "high",
            "title": "Earthquake Alert",
            "description": "Magnitude 6.2 earthquake detected 15km from your location",
            "distance_km": 15.0,
            "issued_at": "2026-08-07T09:58:00Z",
            "source": "USGS",
            "coordinates": { "lat": 37.7749, "lng": -122.4194 }
        },
        {
            "id": "2",
            "kind": "flood",
            "severity": "medium",
            "title": "Flood Warning",
            "description": "Heavy rainfall causing flash floods in downtown area",
            "distance_km": 8.0,
            "issued_at": "2026-08-07T09:45:00Z",
            "source": "National Weather Service",
            "coordinates": { "lat": 37.7849, "lng": -122.4094 }
        }
    ]
}"#;

/// Sample community message log
///
/// The third entry omits `is_verified` to cover the serde default.
pub const MESSAGE_LOG_FIXTURE: &str = r#"[
    {
        "id": "1",
        "sender": "John D.",
        "content": "Everyone safe at the community center",
        "sent_at": "2026-08-07T09:58:00Z",
        "kind": "status",
        "is_own": false,
        "is_verified": false
    },
    {
        "id": "2",
        "sender": "You",
        "content": "Roads blocked on Main St, taking alternate route",
        "sent_at": "2026-08-07T09:55:00Z",
        "kind": "info",
        "is_own": true,
        "is_verified": false
    },
    {
        "id": "3",
        "sender": "Maria S.",
        "content": "Need medical assistance at Pine & 5th",
        "sent_at": "2026-08-07T09:52:00Z",
        "kind": "emergency",
        "is_own": false
    },
    {
        "id": "4",
        "sender": "Rescuer Alpha",
        "content": "Medical team dispatched to Pine & 5th",
        "sent_at": "2026-08-07T09:54:00Z",
        "kind": "response",
        "is_own": false,
        "is_verified": true
    }
]"#;
