//! Typed records for the content store's JSON API.
//!
//! Every response arrives as `{ data: T, meta?: { pagination } }`; the
//! client unwraps the envelope and hands back `data`. Relations are
//! `Option` because the store only includes them when a query asks for
//! them via `populate`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<MediaFormats>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaFormats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MediaFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<MediaFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<MediaFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<MediaFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaFormat {
    pub url: String,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ShipStatus {
    Operational,
    UnderConstruction,
    Planned,
}

impl ShipStatus {
    pub fn label(self) -> &'static str {
        match self {
            ShipStatus::Operational => "Operational",
            ShipStatus::UnderConstruction => "Under Construction",
            ShipStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hero_image: Option<Media>,
    #[serde(default)]
    pub gallery: Option<Vec<Media>>,
    pub status: ShipStatus,
    pub year_built: i32,
    /// Hull length in meters.
    pub length: f64,
    pub residence_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartments: Option<Vec<Apartment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itineraries: Option<Vec<Itinerary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<Story>>,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApartmentType {
    Studio,
    Bed1,
    Bed2,
    Bed3,
    Penthouse,
}

impl ApartmentType {
    pub fn label(self) -> &'static str {
        match self {
            ApartmentType::Studio => "Studio",
            ApartmentType::Bed1 => "1 Bedroom",
            ApartmentType::Bed2 => "2 Bedrooms",
            ApartmentType::Bed3 => "3 Bedrooms",
            ApartmentType::Penthouse => "Penthouse",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ApartmentType,
    /// Floor area in square meters.
    pub size: f64,
    #[serde(default)]
    pub description: String,
    pub price_from: f64,
    pub price_to: f64,
    pub monthly_fees: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<Box<Ship>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year_round: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<Box<Ship>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<ItineraryStop>>,
}

impl Itinerary {
    /// Stops sorted by their upstream `order` field — the visiting
    /// order the globe engine renders. The store does not guarantee
    /// array order, so sort here rather than trusting it.
    pub fn stops_in_order(&self) -> Vec<ItineraryStop> {
        let mut stops = self.stops.clone().unwrap_or_default();
        stops.sort_by_key(|s| s.order);
        stops
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryStop {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub description: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: i64,
    pub document_id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub cover_image: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<Box<Ship>>,
}

#[cfg(test)]
mod tests {
    use super::{ApartmentType, Envelope, Itinerary, Ship, ShipStatus};
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_a_ship_envelope_with_pagination() {
        let json = r#"{
            "data": [{
                "id": 1,
                "documentId": "abc123",
                "name": "MV Meridian",
                "slug": "mv-meridian",
                "tagline": "Home at sea",
                "description": "",
                "heroImage": {"id": 9, "url": "/uploads/hero.jpg", "alternativeText": null, "width": 1920, "height": 1080},
                "gallery": null,
                "status": "under-construction",
                "yearBuilt": 2027,
                "length": 290.5,
                "residenceCount": 180
            }],
            "meta": {"pagination": {"page": 1, "pageSize": 25, "pageCount": 1, "total": 1}}
        }"#;

        let envelope: Envelope<Vec<Ship>> = serde_json::from_str(json).expect("decode");
        assert_eq!(envelope.data.len(), 1);
        let ship = &envelope.data[0];
        assert_eq!(ship.status, ShipStatus::UnderConstruction);
        assert_eq!(ship.hero_image.as_ref().map(|m| m.url.as_str()), Some("/uploads/hero.jpg"));
        assert!(ship.gallery.is_none());
        assert_eq!(
            envelope.meta.and_then(|m| m.pagination).map(|p| p.total),
            Some(1)
        );
    }

    #[test]
    fn stops_come_back_in_visiting_order() {
        let json = r#"{
            "id": 4,
            "documentId": "it-1",
            "name": "Caribbean Loop",
            "description": "",
            "yearRound": true,
            "stops": [
                {"id": 2, "documentId": "s2", "name": "San Juan", "latitude": 18.47, "longitude": -66.1, "arrivalDate": null, "departureDate": null, "description": "", "order": 2},
                {"id": 1, "documentId": "s1", "name": "Key West", "latitude": 24.55, "longitude": -81.78, "arrivalDate": "2027-01-04", "departureDate": "2027-01-06", "description": "", "order": 1},
                {"id": 3, "documentId": "s3", "name": "Bridgetown", "latitude": 13.1, "longitude": -59.6, "arrivalDate": null, "departureDate": null, "description": "", "order": 3}
            ]
        }"#;

        let itinerary: Itinerary = serde_json::from_str(json).expect("decode");
        let names: Vec<String> = itinerary
            .stops_in_order()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Key West", "San Juan", "Bridgetown"]);
    }

    #[test]
    fn missing_stops_relation_means_no_stops() {
        let json = r#"{"id": 4, "documentId": "it-1", "name": "TBD", "description": "", "yearRound": false}"#;
        let itinerary: Itinerary = serde_json::from_str(json).expect("decode");
        assert!(itinerary.stops_in_order().is_empty());
    }

    #[test]
    fn enum_wire_names_round_trip() {
        assert_eq!(
            serde_json::to_string(&ShipStatus::UnderConstruction).expect("encode"),
            "\"under-construction\""
        );
        let kind: ApartmentType = serde_json::from_str("\"bed2\"").expect("decode");
        assert_eq!(kind, ApartmentType::Bed2);
    }

    #[test]
    fn status_and_type_labels() {
        assert_eq!(ShipStatus::Operational.label(), "Operational");
        assert_eq!(ShipStatus::UnderConstruction.label(), "Under Construction");
        assert_eq!(ApartmentType::Studio.label(), "Studio");
        assert_eq!(ApartmentType::Bed3.label(), "3 Bedrooms");
        assert_eq!(ApartmentType::Penthouse.label(), "Penthouse");
    }
}
