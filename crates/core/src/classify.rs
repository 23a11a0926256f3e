//! Listing classification for the listing-manager view.
//!
//! Partitions a combined listing collection (session-created plus
//! externally supplied) into three disjoint buckets under two overlay
//! sets. Input order is preserved within each bucket.

use crate::types::{Listing, ListingStatus};
use std::collections::HashSet;
use uuid::Uuid;

/// The three disjoint buckets produced by [`classify_listings`].
#[derive(Debug, Clone, Default)]
pub struct ListingBuckets {
    pub sold: Vec<Listing>,
    pub active: Vec<Listing>,
    pub off_market: Vec<Listing>,
}

impl ListingBuckets {
    pub fn total(&self) -> usize {
        self.sold.len() + self.active.len() + self.off_market.len()
    }
}

/// Partition `listings` into Sold / Active / Off-market buckets.
///
/// Precedence: a listing hidden by id is excluded from all buckets
/// regardless of status; otherwise a `sold_ids` overlay wins over the
/// listing's own status; otherwise the native status routes Active
/// listings to Active and everything else to Off-market.
pub fn classify_listings(
    listings: &[Listing],
    sold_ids: &HashSet<Uuid>,
    hidden_ids: &HashSet<Uuid>,
) -> ListingBuckets {
    let mut buckets = ListingBuckets::default();

    for listing in listings {
        if hidden_ids.contains(&listing.id) {
            continue;
        }
        if sold_ids.contains(&listing.id) {
            buckets.sold.push(listing.clone());
        } else if listing.status == ListingStatus::Active {
            buckets.active.push(listing.clone());
        } else {
            buckets.off_market.push(listing.clone());
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListingOrigin;

    fn listing(status: ListingStatus) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            address: "12 Birchwood Ln".to_string(),
            price: 450_000.0,
            bedrooms: 3,
            bathrooms: 2,
            image_urls: vec!["https://cdn.example.com/1.jpg".to_string()],
            primary_image_index: 0,
            status,
            origin: ListingOrigin::Manual,
            is_draft: false,
        }
    }

    #[test]
    fn test_hidden_excluded_from_all_buckets() {
        let sold = listing(ListingStatus::Active);
        let hidden = listing(ListingStatus::Active);
        let listings = vec![sold.clone(), hidden.clone()];

        let sold_ids: HashSet<Uuid> = [sold.id, hidden.id].into_iter().collect();
        let hidden_ids: HashSet<Uuid> = [hidden.id].into_iter().collect();

        let buckets = classify_listings(&listings, &sold_ids, &hidden_ids);
        assert_eq!(buckets.sold.len(), 1);
        assert_eq!(buckets.sold[0].id, sold.id);
        assert_eq!(buckets.total(), 1);
    }

    #[test]
    fn test_sold_overlay_wins_over_native_status() {
        let l = listing(ListingStatus::Active);
        let sold_ids: HashSet<Uuid> = [l.id].into_iter().collect();

        let buckets = classify_listings(&[l], &sold_ids, &HashSet::new());
        assert_eq!(buckets.sold.len(), 1);
        assert!(buckets.active.is_empty());
    }

    #[test]
    fn test_native_status_routing() {
        let active = listing(ListingStatus::Active);
        let pending = listing(ListingStatus::Pending);
        let sold = listing(ListingStatus::Sold);
        let listings = vec![active.clone(), pending.clone(), sold.clone()];

        let buckets = classify_listings(&listings, &HashSet::new(), &HashSet::new());
        assert_eq!(buckets.active.len(), 1);
        assert_eq!(buckets.active[0].id, active.id);
        assert_eq!(buckets.off_market.len(), 2);
        assert!(buckets.sold.is_empty());
    }

    #[test]
    fn test_buckets_disjoint_and_complete() {
        let listings: Vec<Listing> = (0..8)
            .map(|i| {
                listing(match i % 3 {
                    0 => ListingStatus::Active,
                    1 => ListingStatus::Pending,
                    _ => ListingStatus::Sold,
                })
            })
            .collect();
        let sold_ids: HashSet<Uuid> = listings[..2].iter().map(|l| l.id).collect();
        let hidden_ids: HashSet<Uuid> = [listings[7].id].into_iter().collect();

        let buckets = classify_listings(&listings, &sold_ids, &hidden_ids);

        let mut seen: HashSet<Uuid> = HashSet::new();
        for l in buckets
            .sold
            .iter()
            .chain(buckets.active.iter())
            .chain(buckets.off_market.iter())
        {
            assert!(seen.insert(l.id), "listing appears in more than one bucket");
        }
        assert_eq!(buckets.total() + hidden_ids.len(), listings.len());
    }

    #[test]
    fn test_input_order_preserved() {
        let a = listing(ListingStatus::Active);
        let b = listing(ListingStatus::Active);
        let c = listing(ListingStatus::Active);
        let buckets = classify_listings(
            &[a.clone(), b.clone(), c.clone()],
            &HashSet::new(),
            &HashSet::new(),
        );
        let ids: Vec<Uuid> = buckets.active.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }
}
