use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProviderDoc {
    pub id: i32,
    pub name: String,
    pub service_type: String,
    pub price: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct NewProviderDoc {
    pub name: String,
    pub service_type: String,
    pub price: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image: Option<String>,
}

/// Stored booking: the assigned `id` plus every field the client sent.
#[derive(ToSchema)]
pub struct BookingDoc {
    pub id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list,
        crate::routes::providers::list,
        crate::routes::providers::create,
        crate::routes::bookings::list,
        crate::routes::bookings::create,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDoc,
            ProviderDoc,
            NewProviderDoc,
            BookingDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services"),
        (name = "providers"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use models::{home_service, provider::{self, NewProvider}};

    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/health", "/api/services", "/api/providers", "/api/bookings"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }

    fn schema_keys(doc: &serde_json::Value, name: &str) -> BTreeSet<String> {
        doc["components"]["schemas"][name]["properties"]
            .as_object()
            .map(|props| props.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn json_keys<T: serde::Serialize>(value: &T) -> BTreeSet<String> {
        serde_json::to_value(value)
            .ok()
            .and_then(|v| v.as_object().map(|o| o.keys().cloned().collect()))
            .unwrap_or_default()
    }

    #[test]
    fn schemas_match_serialized_models() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("openapi serializes");

        let service = home_service::Model { id: 1, name: "Cleaner".into(), icon: "broom".into(), description: "d".into() };
        assert_eq!(schema_keys(&doc, "ServiceDoc"), json_keys(&service));

        let new_provider = NewProvider { name: "Asha".into(), service_type: "Maid".into(), ..Default::default() };
        assert_eq!(schema_keys(&doc, "NewProviderDoc"), json_keys(&new_provider));

        let stored = provider::Model {
            id: 1,
            name: new_provider.name.clone(),
            service_type: new_provider.service_type.clone(),
            price: None,
            gender: None,
            phone: None,
            rating: None,
            lat: None,
            lng: None,
            image: None,
        };
        assert_eq!(schema_keys(&doc, "ProviderDoc"), json_keys(&stored));

        let required: BTreeSet<String> = doc["components"]["schemas"]["NewProviderDoc"]["required"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
            .unwrap_or_default();
        assert_eq!(required, BTreeSet::from(["name".to_string(), "serviceType".to_string()]));
    }
}
