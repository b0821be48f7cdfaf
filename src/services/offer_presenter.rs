use crate::models::offer::{Offer, TransferOption};
use crate::services::asset_resolver::AssetResolver;

/// Turns allocated offers into the ordered view models the API returns.
pub struct OfferPresenter;

impl OfferPresenter {
    /// Stable order: vehicle unit id first, then sequence number within
    /// the group. Two identical searches produce identical output.
    pub fn present(mut offers: Vec<Offer>, assets: &AssetResolver) -> Vec<TransferOption> {
        offers.sort_by_key(|offer| (offer.record.rate.vehicle_unit_id, offer.unit_number));
        offers
            .iter()
            .map(|offer| Self::option_for(offer, assets))
            .collect()
    }

    fn option_for(offer: &Offer, assets: &AssetResolver) -> TransferOption {
        let unit_hex = offer.record.rate.vehicle_unit_id.to_hex();
        let rate_hex = offer
            .record
            .rate
            .id
            .map(|id| id.to_hex())
            .unwrap_or_default();
        let image_url = assets.resolve(&offer.record.unit, &offer.record.category);

        TransferOption {
            id: format!("{}-{}", unit_hex, offer.unit_number),
            rate_id: rate_hex,
            vehicle_unit_id: unit_hex,
            unit_number: offer.unit_number,
            vehicle_name: offer.record.unit.name.clone(),
            vehicle_description: offer.record.unit.description.clone(),
            capacity: offer.resolved_capacity,
            price: offer.record.rate.price,
            direction: offer.record.rate.direction,
            image_url,
            is_fleet_split: offer.total_units_in_group > 1,
            total_units_in_group: offer.total_units_in_group,
        }
    }
}
