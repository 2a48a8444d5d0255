use serde::{Deserialize, Serialize};

/// A playlist as listed by the account, before its tracks are fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub owner_display_name: String,
    pub description: String,
    pub snapshot_id: String,
    /// Track count reported by the listing, not verified against the items.
    pub track_total: u32,
}

impl PlaylistSummary {
    pub fn with_tracks(self, tracks: Vec<TrackRecord>) -> PlaylistRecord {
        PlaylistRecord {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id,
            owner_display_name: self.owner_display_name,
            description: self.description,
            snapshot_id: self.snapshot_id,
            tracks,
        }
    }
}

/// Exported playlist. Field order is the key order of the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub owner_display_name: String,
    pub description: String,
    pub snapshot_id: String,
    pub tracks: Vec<TrackRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub album_release_date: String,
    pub spotify_url: String,
    pub added_at: String,
    pub added_by: Option<String>,
}

/// Anything the name filter can select on.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for PlaylistSummary {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
impl TrackRecord {
    pub fn mock(position: usize, name: &str) -> Self {
        Self {
            position,
            name: name.to_string(),
            artist: "Mock Artist".to_string(),
            album: "Mock Album".to_string(),
            album_release_date: "2020-01-01".to_string(),
            spotify_url: format!("https://open.spotify.com/track/{}", position),
            added_at: "2024-05-01T12:00:00Z".to_string(),
            added_by: Some("mock_user".to_string()),
        }
    }
}

#[cfg(test)]
impl PlaylistSummary {
    pub fn mock(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            owner_id: "owner".to_string(),
            owner_display_name: "Owner".to_string(),
            description: String::new(),
            snapshot_id: "snap".to_string(),
            track_total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let mut tracks = vec![
            TrackRecord::mock(0, "First"),
            TrackRecord::mock(1, "Søngé ✨"),
            TrackRecord::mock(2, "Third"),
        ];
        tracks[2].added_by = None;

        let record = PlaylistSummary::mock("p1", "Été").with_tracks(tracks);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: PlaylistRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
        assert!(parsed.tracks[2].added_by.is_none());
    }

    #[test]
    fn test_key_order() {
        let record =
            PlaylistSummary::mock("p1", "Mix").with_tracks(vec![TrackRecord::mock(0, "A")]);
        let json = serde_json::to_string(&record).unwrap();

        let keys = [
            "\"id\"",
            "\"name\"",
            "\"owner_id\"",
            "\"owner_display_name\"",
            "\"description\"",
            "\"snapshot_id\"",
            "\"tracks\"",
        ];
        let offsets: Vec<usize> = keys.iter().map(|k| json.find(*k).unwrap()).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{}", json);
    }
}
