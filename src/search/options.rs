use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceOption {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopularDestination {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u32,
}

pub const POPULAR_DESTINATIONS: [PopularDestination; 8] = [
    PopularDestination { id: "marrakech", name: "Marrakech", count: 45 },
    PopularDestination { id: "casablanca", name: "Casablanca", count: 32 },
    PopularDestination { id: "fez", name: "Fez", count: 28 },
    PopularDestination { id: "essaouira", name: "Essaouira", count: 18 },
    PopularDestination { id: "chefchaouen", name: "Chefchaouen", count: 12 },
    PopularDestination { id: "agadir", name: "Agadir", count: 35 },
    PopularDestination { id: "tangier", name: "Tangier", count: 22 },
    PopularDestination { id: "meknes", name: "Meknes", count: 15 },
];

pub const PROPERTY_TYPES: [ReferenceOption; 8] = [
    ReferenceOption { id: "riad", name: "Riad", icon: "🏛️" },
    ReferenceOption { id: "villa", name: "Villa", icon: "🏡" },
    ReferenceOption { id: "apartment", name: "Apartment", icon: "🏢" },
    ReferenceOption { id: "hotel", name: "Hotel", icon: "🏨" },
    ReferenceOption { id: "guesthouse", name: "Guesthouse", icon: "🏠" },
    ReferenceOption { id: "resort", name: "Resort", icon: "🏖️" },
    ReferenceOption { id: "camp", name: "Desert Camp", icon: "⛺" },
    ReferenceOption { id: "castle", name: "Castle", icon: "🏰" },
];

pub const COMMON_AMENITIES: [ReferenceOption; 12] = [
    ReferenceOption { id: "wifi", name: "WiFi", icon: "📶" },
    ReferenceOption { id: "pool", name: "Swimming Pool", icon: "🏊" },
    ReferenceOption { id: "spa", name: "Spa", icon: "🧖" },
    ReferenceOption { id: "parking", name: "Parking", icon: "🚗" },
    ReferenceOption { id: "restaurant", name: "Restaurant", icon: "🍽️" },
    ReferenceOption { id: "gym", name: "Fitness Center", icon: "💪" },
    ReferenceOption { id: "ac", name: "Air Conditioning", icon: "❄️" },
    ReferenceOption { id: "terrace", name: "Terrace", icon: "🌿" },
    ReferenceOption { id: "hammam", name: "Hammam", icon: "🛁" },
    ReferenceOption { id: "concierge", name: "Concierge", icon: "🛎️" },
    ReferenceOption { id: "kitchen", name: "Kitchen", icon: "🍳" },
    ReferenceOption { id: "fireplace", name: "Fireplace", icon: "🔥" },
];
