use std::collections::BTreeMap;

use mongodb::bson::oid::ObjectId;

use crate::models::offer::Offer;
use crate::models::rate::RateRecord;

/// Expands rate records into per-unit offers, splitting the fleet when a
/// party is too large for a single vehicle.
pub struct FleetAllocator;

impl FleetAllocator {
    /// Groups rates by vehicle unit, keeps one representative rate per
    /// group (lowest rate id, so duplicate rows never double an offer),
    /// then emits one offer per vehicle instance needed for the party.
    pub fn allocate(records: Vec<RateRecord>, party_size: u32) -> Vec<Offer> {
        let mut groups: BTreeMap<ObjectId, Vec<RateRecord>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.rate.vehicle_unit_id)
                .or_default()
                .push(record);
        }

        let mut offers = Vec::new();
        for (_, group) in groups {
            let Some(representative) = group.into_iter().min_by_key(|record| record.rate.id)
            else {
                continue;
            };
            let capacity = Self::resolved_capacity(&representative);
            let units_needed = Self::units_needed(party_size, capacity);
            for unit_number in 1..=units_needed {
                offers.push(Offer {
                    record: representative.clone(),
                    unit_number,
                    total_units_in_group: units_needed,
                    resolved_capacity: capacity,
                });
            }
        }
        offers
    }

    /// Per-unit override wins when present and positive, otherwise the
    /// category default applies. Never returns zero.
    pub fn resolved_capacity(record: &RateRecord) -> u32 {
        let capacity = match record.unit.max_capacity {
            Some(capacity) if capacity > 0 => capacity,
            _ => record.category.max_capacity,
        };
        capacity.max(1)
    }

    /// `max(1, ceil(party / capacity))`. A zero party still gets one
    /// representative offer.
    pub fn units_needed(party_size: u32, capacity: u32) -> u32 {
        if party_size == 0 {
            return 1;
        }
        party_size.div_ceil(capacity.max(1)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rate::{Rate, TripDirection};
    use crate::models::vehicle::{VehicleCategory, VehicleUnit};
    use rust_decimal_macros::dec;

    // Struct literals here, not constructors: rows read back from the
    // store bypass constructor clamping, and the allocator has to cope.
    fn record(unit_override: Option<u32>, category_default: u32) -> RateRecord {
        let category_id = ObjectId::new();
        let unit_id = ObjectId::new();
        let category = VehicleCategory {
            id: Some(category_id),
            code: "VAN".to_string(),
            name: "Van".to_string(),
            description: None,
            max_capacity: category_default,
        };
        let unit = VehicleUnit {
            id: Some(unit_id),
            name: "VAN 001".to_string(),
            category_id,
            max_capacity: unit_override,
            description: None,
            asset: None,
        };
        let rate = Rate {
            id: Some(ObjectId::new()),
            zone_id: ObjectId::new(),
            vehicle_unit_id: unit_id,
            direction: TripDirection::OneWay,
            price: dec!(65.00),
        };
        RateRecord {
            rate,
            unit,
            category,
        }
    }

    #[test]
    fn test_units_needed_arithmetic() {
        assert_eq!(FleetAllocator::units_needed(15, 8), 2);
        assert_eq!(FleetAllocator::units_needed(8, 8), 1);
        assert_eq!(FleetAllocator::units_needed(9, 8), 2);
        assert_eq!(FleetAllocator::units_needed(0, 8), 1);
        assert_eq!(FleetAllocator::units_needed(1, 1), 1);
        assert_eq!(FleetAllocator::units_needed(5, 0), 5);
    }

    #[test]
    fn test_capacity_override_beats_category_default() {
        assert_eq!(FleetAllocator::resolved_capacity(&record(Some(12), 8)), 12);
        assert_eq!(FleetAllocator::resolved_capacity(&record(None, 8)), 8);
        // zero override falls through to the category default
        assert_eq!(FleetAllocator::resolved_capacity(&record(Some(0), 8)), 8);
        // nothing usable still never yields zero
        assert_eq!(FleetAllocator::resolved_capacity(&record(Some(0), 0)), 1);
    }

    #[test]
    fn test_fleet_split_emits_sequenced_offers() {
        let offers = FleetAllocator::allocate(vec![record(None, 8)], 15);
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].unit_number, 1);
        assert_eq!(offers[1].unit_number, 2);
        assert!(offers.iter().all(|offer| offer.total_units_in_group == 2));
        assert!(offers.iter().all(|offer| offer.resolved_capacity == 8));
    }

    #[test]
    fn test_exact_fit_is_a_single_offer() {
        let offers = FleetAllocator::allocate(vec![record(None, 8)], 8);
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].unit_number, 1);
        assert_eq!(offers[0].total_units_in_group, 1);
    }

    #[test]
    fn test_zero_party_still_shows_one_offer() {
        let offers = FleetAllocator::allocate(vec![record(None, 8)], 0);
        assert_eq!(offers.len(), 1);
    }

    #[test]
    fn test_duplicate_rates_collapse_to_lowest_id() {
        let mut first = record(None, 8);
        // same unit, later rate id, different price
        let mut duplicate = first.clone();
        duplicate.rate.id = Some(ObjectId::new());
        duplicate.rate.price = dec!(999.00);
        first.rate.price = dec!(65.00);

        let offers = FleetAllocator::allocate(vec![duplicate, first], 4);
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].record.rate.price, dec!(65.00));
    }

    #[test]
    fn test_groups_are_independent() {
        let van = record(None, 8);
        let sprinter = record(None, 16);
        let offers = FleetAllocator::allocate(vec![van, sprinter], 15);
        // 15 people: two vans or one sprinter
        assert_eq!(offers.len(), 3);
    }
}
