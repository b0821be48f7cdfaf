use crate::models::vehicle::{normalize_code, VehicleCategory, VehicleUnit};

pub const PLACEHOLDER_FILE: &str = "placeholder.jpg";

const DEFAULT_ASSET_BASE: &str = "/static/images/cars";

/// One step of the image fallback chain. Strategies run in the order of
/// [`STRATEGY_CHAIN`]; the first one that yields a URL wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStrategy {
    /// The unit's own `asset` field (absolute URL or bare file name).
    ExplicitAsset,
    /// A file derived from the unit name, e.g. "LUXURY-VAN 02" maps to
    /// Luxury_Van.jpg.
    NamePattern,
    /// The stock image for the unit's category code.
    CategoryDefault,
    /// Always resolves. Keeps the chain total.
    Placeholder,
}

pub const STRATEGY_CHAIN: [AssetStrategy; 4] = [
    AssetStrategy::ExplicitAsset,
    AssetStrategy::NamePattern,
    AssetStrategy::CategoryDefault,
    AssetStrategy::Placeholder,
];

/// Resolves a display image URL for a vehicle unit. Never fails; the
/// worst case is the generic placeholder.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_url: String,
}

impl AssetResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("STATIC_ASSET_BASE").unwrap_or_else(|_| DEFAULT_ASSET_BASE.to_string());
        Self::new(&base_url)
    }

    pub fn resolve(&self, unit: &VehicleUnit, category: &VehicleCategory) -> String {
        for strategy in STRATEGY_CHAIN {
            if let Some(url) = self.apply(strategy, unit, category) {
                log::debug!("asset for {:?} via {:?}: {}", unit.name, strategy, url);
                return url;
            }
        }
        self.file_url(PLACEHOLDER_FILE)
    }

    fn apply(
        &self,
        strategy: AssetStrategy,
        unit: &VehicleUnit,
        category: &VehicleCategory,
    ) -> Option<String> {
        match strategy {
            AssetStrategy::ExplicitAsset => self.explicit_asset(unit),
            AssetStrategy::NamePattern => self.name_pattern(unit),
            AssetStrategy::CategoryDefault => self.category_default(category),
            AssetStrategy::Placeholder => Some(self.file_url(PLACEHOLDER_FILE)),
        }
    }

    /// Absolute URLs pass through untouched. Anything else is reduced to
    /// its basename and gets a .jpg extension when it has none.
    fn explicit_asset(&self, unit: &VehicleUnit) -> Option<String> {
        let raw = unit.asset.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let lowered = raw.to_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") || raw.starts_with("//")
        {
            return Some(raw.to_string());
        }
        let basename = raw.rsplit('/').next().unwrap_or(raw);
        if basename.is_empty() {
            return None;
        }
        let file = if basename.contains('.') {
            basename.to_string()
        } else {
            format!("{basename}.jpg")
        };
        Some(self.file_url(&file))
    }

    fn name_pattern(&self, unit: &VehicleUnit) -> Option<String> {
        let name = unit.name.trim().to_uppercase();
        if name.is_empty() {
            return None;
        }

        // Substring matches. LUXURY-MINI-BUS has to come before MINI-BUS
        // or it would never be reached.
        const CONTAINS_TABLE: [(&str, &str); 18] = [
            ("VAN-DARK", "Van_Dark.jpg"),
            ("STANDARD-VAN", "Standard_Van.jpg"),
            ("LUXURY-VAN", "Luxury_Van.jpg"),
            ("ECONOMY-SEDAN", "Economy_Sedan.jpg"),
            ("PREMIUM-SEDAN", "Premium_Sedan.jpg"),
            ("COMPACT-SUV", "Compact_SUV.jpg"),
            ("MIDSIZE-SUV", "Midsize_SUV.jpg"),
            ("LUXURY-SUV", "Luxury_SUV.jpg"),
            ("MINI-SPRINTER", "Mini_Sprinter.jpg"),
            ("STANDARD-SPRINTER", "Standard_Sprinter.jpg"),
            ("LUXURY-SPRINTER", "Luxury_Sprinter.jpg"),
            ("EXECUTIVE-SPRINTER", "Executive_Sprinter.jpg"),
            ("LUXURY-MINI-BUS", "Luxury_Mini_Bus.jpg"),
            ("MINI-BUS", "Mini_Bus.jpg"),
            ("PARTY-BUS", "Party_Bus.jpg"),
            ("TOUR-BUS", "Tour_Bus.jpg"),
            ("CHARTER-BUS", "Charter_Bus.jpg"),
            ("HUMMER-LIMO", "Hummer_Limo.jpg"),
        ];
        for (needle, file) in CONTAINS_TABLE {
            if name.contains(needle) {
                return Some(self.file_url(file));
            }
        }

        if name.contains("LIMOUSINE") {
            let file = if name.contains("STRETCH") {
                "Stretch_Limousine.jpg"
            } else {
                "Luxury_Limousine.jpg"
            };
            return Some(self.file_url(file));
        }

        // Prefix matches keep the fleet number: HIACE-VAN-003 maps to
        // Hiace_White_003.jpg.
        const PREFIX_TABLE: [(&str, &str); 4] = [
            ("HIACE-VAN-", "Hiace_White_"),
            ("SPRINTER-MB-", "Mercedes_Sprinter_"),
            ("PILOT-HP-", "Honda_Pilot_"),
            ("TRANSIT-FT-", "Ford_Transit_"),
        ];
        for (prefix, stem) in PREFIX_TABLE {
            if let Some(suffix) = name.strip_prefix(prefix) {
                return Some(self.file_url(&format!("{stem}{suffix}.jpg")));
            }
        }

        if let Some(suffix) = name.strip_prefix("SUBURBAN-") {
            let file = if suffix == "101" || suffix == "102" {
                format!("Suburban_Black_{suffix}.jpg")
            } else {
                format!("Suburban_White_{suffix}.jpg")
            };
            return Some(self.file_url(&file));
        }

        None
    }

    fn category_default(&self, category: &VehicleCategory) -> Option<String> {
        let file = match normalize_code(&category.code).as_str() {
            "VAN" => "Van_Dark.jpg",
            "SPRINTER" => "Small_Sprinter.jpg",
            "SUV" => "Midsize_SUV.jpg",
            "BUS" => "Mini_Bus.jpg",
            "SEDAN" => "Economy_Sedan.jpg",
            _ => return None,
        };
        Some(self.file_url(file))
    }

    fn file_url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url, file)
    }
}
