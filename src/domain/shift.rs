use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single posted work opportunity as delivered by the shifts endpoint.
///
/// Field names follow the wire format. A `Shift` is immutable once
/// deserialized; the visible set of shifts only ever changes by replacing
/// the whole collection in the store. `current_workers` may transiently
/// exceed `plan_workers` (upstream races), so nothing here assumes
/// `current <= plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub logo: String,
    pub address: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "dateStartByCity")]
    pub date_start_by_city: String,
    #[serde(rename = "timeStartByCity")]
    pub time_start_by_city: String,
    #[serde(rename = "timeEndByCity")]
    pub time_end_by_city: String,
    #[serde(rename = "currentWorkers")]
    pub current_workers: u32,
    #[serde(rename = "planWorkers")]
    pub plan_workers: u32,
    #[serde(rename = "workTypes")]
    pub work_types: Vec<WorkType>,
    #[serde(rename = "priceWorker")]
    pub price_worker: f64,
    #[serde(rename = "bonusPriceWorker", default)]
    pub bonus_price_worker: f64,
    #[serde(rename = "customerFeedbacksCount")]
    pub customer_feedbacks_count: String,
    #[serde(rename = "customerRating")]
    pub customer_rating: Option<f64>,
    #[serde(rename = "isPromotionEnabled")]
    pub is_promotion_enabled: bool,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// Category label for the kind of labor requested on a shift, with the
/// three inflected display names the source locale needs for counts of
/// "1", "2-4" and "5+".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkType {
    pub id: i64,
    pub name: String,
    #[serde(rename = "nameOne")]
    pub name_one: String,
    #[serde(rename = "nameLt5")]
    pub name_lt5: String,
    #[serde(rename = "nameGt5")]
    pub name_gt5: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        if id.trim().is_empty() {
            return Err(ValidationError::new(String::from(
                "Shift ID cannot be empty",
            )));
        }
        Ok(Self(id.to_owned()))
    }
}

impl AsRef<str> for ShiftId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_id_parse() {
        let valid_id = "70aa3063-5230-4205-be84-bc77d22c0973";
        let parsed = ShiftId::parse(valid_id).expect(valid_id);
        assert_eq!(parsed.as_ref(), valid_id);

        assert!(ShiftId::parse("").is_err());
        assert!(ShiftId::parse("   ").is_err());
    }

    #[test]
    fn test_shift_deserializes_wire_payload() {
        let payload = serde_json::json!({
            "id": "87474322-e143-4378-93a4-1ea6443df80b",
            "logo": "https://example.com/logo.jpg",
            "coordinates": { "longitude": 38.916, "latitude": 45.103 },
            "address": "Краснодар, улица Западный Обход, 69",
            "companyName": "ДОГМА",
            "dateStartByCity": "15.09.2025",
            "timeStartByCity": "08:00",
            "timeEndByCity": "18:00",
            "currentWorkers": 2,
            "planWorkers": 3,
            "workTypes": [{
                "id": 8001,
                "name": "Услуги разнорабочего",
                "nameGt5": "Разнорабочих",
                "nameLt5": "Разнорабочего",
                "nameOne": "Разнорабочий"
            }],
            "priceWorker": 2500,
            "bonusPriceWorker": 0,
            "customerFeedbacksCount": "28 отзывов",
            "customerRating": 4.5,
            "isPromotionEnabled": true
        });

        let shift: Shift =
            serde_json::from_value(payload).expect("Failed to deserialize");
        assert_eq!(shift.company_name, "ДОГМА");
        assert_eq!(shift.current_workers, 2);
        assert_eq!(shift.plan_workers, 3);
        assert_eq!(shift.work_types.len(), 1);
        assert_eq!(shift.work_types[0].name_one, "Разнорабочий");
        let coordinates =
            shift.coordinates.expect("Coordinates should be present");
        assert!((coordinates.latitude - 45.103).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shift_tolerates_missing_optional_fields() {
        let payload = serde_json::json!({
            "id": "a",
            "logo": "",
            "address": "",
            "companyName": "",
            "dateStartByCity": "15.09.2025",
            "timeStartByCity": "08:00",
            "timeEndByCity": "17:00",
            "currentWorkers": 4,
            "planWorkers": 2,
            "workTypes": [],
            "priceWorker": 3448,
            "customerFeedbacksCount": "53 отзыва",
            "customerRating": null,
            "isPromotionEnabled": false
        });

        let shift: Shift =
            serde_json::from_value(payload).expect("Failed to deserialize");
        assert!(shift.customer_rating.is_none());
        assert!(shift.coordinates.is_none());
        assert_eq!(shift.bonus_price_worker, 0.0);
        // Over-capacity is a legal state.
        assert!(shift.current_workers > shift.plan_workers);
    }
}
