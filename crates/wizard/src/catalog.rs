//! In-memory campaign catalog backed by DashMap.
//!
//! Production: replace with a real listing feed or database.
//! This provides the same lookup surface for development and testing.

use adbuilder_core::types::{CampaignRecord, CampaignStatus};
use chrono::{Duration, Utc};
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

/// Lookup-by-identifier source for existing campaigns; edit mode seeds
/// its draft from here.
pub struct CampaignCatalog {
    records: DashMap<Uuid, CampaignRecord>,
}

impl CampaignCatalog {
    pub fn new() -> Self {
        info!("Campaign catalog initialized (in-memory, development mode)");
        let catalog = Self {
            records: DashMap::new(),
        };
        catalog.seed_demo_data();
        catalog
    }

    /// Construct an empty catalog (tests).
    pub fn empty() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Look up a campaign record by id. Async to match the real feed
    /// this stands in for; the in-memory path never blocks.
    pub async fn lookup(&self, id: Uuid) -> Option<CampaignRecord> {
        self.records.get(&id).map(|r| r.value().clone())
    }

    pub fn list(&self) -> Vec<CampaignRecord> {
        let mut records: Vec<CampaignRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    pub fn insert(&self, record: CampaignRecord) {
        self.records.insert(record.id, record);
    }

    fn seed_demo_data(&self) {
        let now = Utc::now();
        let campaigns = vec![
            ("The Maple Street Colonial", "214 Maple St, Arlington, VA", 739_000.0, 4, 3, CampaignStatus::Active, 12),
            ("Sunset Ridge Modern", "88 Sunset Ridge Rd, Austin, TX", 1_150_000.0, 5, 4, CampaignStatus::Active, 9),
            ("The Birchwood Bungalow", "12 Birchwood Ln, Portland, OR", 452_500.0, 3, 2, CampaignStatus::Draft, 4),
            ("Harborview Penthouse", "1 Harbor Way Unit 2201, Seattle, WA", 2_400_000.0, 3, 3, CampaignStatus::Active, 21),
            ("Willow Creek Farmhouse", "3770 Willow Creek Dr, Nashville, TN", 689_900.0, 4, 3, CampaignStatus::Completed, 45),
        ];

        for (name, address, price, beds, baths, status, age_days) in campaigns {
            let id = Uuid::new_v4();
            let photo_urls = (1..=6)
                .map(|i| format!("https://cdn.adbuilder.io/campaigns/{}/photo-{}.jpg", id, i))
                .collect();
            self.records.insert(
                id,
                CampaignRecord {
                    id,
                    property_name: name.to_string(),
                    address: address.to_string(),
                    price,
                    bedrooms: beds,
                    bathrooms: baths,
                    photo_urls,
                    status,
                    created_at: now - Duration::days(age_days),
                },
            );
        }
    }
}

impl Default for CampaignCatalog {
    fn default() -> Self {
        Self::new()
    }
}
