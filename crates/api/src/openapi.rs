// OpenAPI specification generation
//
// Used by the API server (for Swagger UI) and by the export-openapi binary
// (for a static OpenAPI document).

use crate::api;
use mergington_core::Activity;
use utoipa::OpenApi;

/// OpenAPI documentation for the Mergington activities API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::activities::list_activities,
        api::activities::signup_for_activity,
        api::activities::unregister_from_activity,
    ),
    components(
        schemas(
            Activity,
            api::ErrorResponse,
            api::MessageResponse,
        )
    ),
    tags(
        (name = "activities", description = "Activity directory and roster endpoints")
    ),
    info(
        title = "Mergington High School Activities API",
        version = "0.1.0",
        description = "API for browsing extracurricular activities and managing signups",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> String {
        Self::openapi()
            .to_pretty_json()
            .expect("Failed to serialize OpenAPI spec")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_activity_paths() {
        let doc: serde_json::Value = serde_json::from_str(&ApiDoc::to_json()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        assert!(paths.contains_key("/activities"));
        assert!(paths["/activities/{activity_name}/signup"]["post"].is_object());
        assert!(paths["/activities/{activity_name}/unregister"]["delete"].is_object());
        assert!(doc["components"]["schemas"]["Activity"].is_object());
    }
}
