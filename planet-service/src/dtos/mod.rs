use crate::models::planet::deserialize_identifier;
use serde::{Deserialize, Serialize};

/// Body of `POST /planet`. `id` may be a number or a numeric string. Any
/// integer is looked up; the seed data only holds 0 (the sun) to 9.
#[derive(Debug, Deserialize)]
pub struct PlanetRequest {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct OsResponse {
    pub os: String,
    pub env: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_string() {
        let req: PlanetRequest = serde_json::from_str(r#"{ "id": "7" }"#).unwrap();
        assert_eq!(req.id, 7);
    }

    #[test]
    fn ids_outside_seed_range_still_parse() {
        let req: PlanetRequest = serde_json::from_str(r#"{ "id": 10 }"#).unwrap();
        assert_eq!(req.id, 10);

        let req: PlanetRequest = serde_json::from_str(r#"{ "id": -1 }"#).unwrap();
        assert_eq!(req.id, -1);
    }

    #[test]
    fn non_integer_id_is_rejected() {
        assert!(serde_json::from_str::<PlanetRequest>(r#"{ "id": 1.5 }"#).is_err());
        assert!(serde_json::from_str::<PlanetRequest>(r#"{ "id": "earth" }"#).is_err());
    }

    #[test]
    fn missing_env_serializes_as_null() {
        let body = serde_json::to_value(OsResponse {
            os: "host-1".to_string(),
            env: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "os": "host-1", "env": null }));
    }
}
