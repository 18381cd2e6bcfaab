//! GPS-to-room resolution.
//!
//! Rooms are modeled as rectangular latitude/longitude boxes. Resolution is
//! a first-match scan in declaration order; overlapping regions are settled
//! by order, not by fit, so results stay deterministic across calls.

/// A named rectangular region with inclusive bounds on both axes.
#[derive(Debug, Clone)]
pub struct RoomRegion {
    pub name: String,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl RoomRegion {
    pub fn new(
        name: impl Into<String>,
        lat_min: f64,
        lat_max: f64,
        lng_min: f64,
        lng_max: f64,
    ) -> Self {
        Self {
            name: name.into(),
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    /// Whether the point lies inside the region (bounds inclusive).
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lng_min..=self.lng_max).contains(&longitude)
    }
}

/// Room name reported when coordinates match no known region.
pub const UNKNOWN_ROOM: &str = "Phòng Không Xác Định";

/// Confidence for a bounding-box match.
const MATCH_CONFIDENCE: f64 = 0.9;

/// Confidence for the unknown-room fallback.
const UNKNOWN_CONFIDENCE: f64 = 0.1;

/// A resolved location fix.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomFix {
    pub room: String,
    pub confidence: f64,
}

/// Ordered set of named room regions.
pub struct GeofenceMap {
    regions: Vec<RoomRegion>,
}

impl GeofenceMap {
    /// Build a map from an ordered region list. Order is significant: the
    /// first region containing a point wins.
    pub fn new(regions: Vec<RoomRegion>) -> Self {
        Self { regions }
    }

    /// Resolve coordinates to the first containing region, or the unknown
    /// sentinel with low confidence.
    pub fn resolve(&self, latitude: f64, longitude: f64) -> RoomFix {
        for region in &self.regions {
            if region.contains(latitude, longitude) {
                return RoomFix {
                    room: region.name.clone(),
                    confidence: MATCH_CONFIDENCE,
                };
            }
        }
        RoomFix {
            room: UNKNOWN_ROOM.to_string(),
            confidence: UNKNOWN_CONFIDENCE,
        }
    }

    pub fn regions(&self) -> &[RoomRegion] {
        &self.regions
    }
}

impl Default for GeofenceMap {
    /// Ward layout of the deployment site. All rooms share a longitude
    /// corridor; latitude bands distinguish them.
    fn default() -> Self {
        Self::new(vec![
            RoomRegion::new("Phòng 101", 10.7756, 10.7757, 106.7017, 106.7018),
            RoomRegion::new("Phòng 102", 10.7757, 10.7758, 106.7017, 106.7018),
            RoomRegion::new("Phòng 103", 10.7758, 10.7759, 106.7017, 106.7018),
            RoomRegion::new("Phòng Cấp Cứu", 10.7759, 10.7760, 106.7017, 106.7018),
            RoomRegion::new("ICU", 10.7760, 10.7761, 106.7017, 106.7018),
        ])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
