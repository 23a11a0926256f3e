use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sale status of a property listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
}

/// Where a listing came from. Replaces field-sniffing on a
/// "manually created" marker with an explicit tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingOrigin {
    /// Created by the agent inside the wizard session.
    Manual,
    /// Supplied by an external campaign/property feed.
    Imported,
}

/// A property listing manageable independently of any single campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub address: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub image_urls: Vec<String>,
    pub primary_image_index: usize,
    pub status: ListingStatus,
    pub origin: ListingOrigin,
    /// Saved-as-draft flag; drives the save notification wording.
    pub is_draft: bool,
}

/// A scheduled open house for a campaign. Display order follows
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenHouseEvent {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Status of a campaign record in the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Completed,
}

/// An existing ad campaign as returned by the catalog lookup.
/// The wizard's edit mode seeds its draft from one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: Uuid,
    pub property_name: String,
    pub address: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub photo_urls: Vec<String>,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

impl CampaignRecord {
    /// Normalize an externally supplied record into the canonical
    /// `Listing` shape before any downstream logic runs.
    pub fn to_listing(&self) -> Listing {
        Listing {
            id: self.id,
            address: self.address.clone(),
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            image_urls: self.photo_urls.clone(),
            primary_image_index: 0,
            status: match self.status {
                CampaignStatus::Completed => ListingStatus::Sold,
                _ => ListingStatus::Active,
            },
            origin: ListingOrigin::Imported,
            is_draft: false,
        }
    }
}
