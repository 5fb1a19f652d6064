use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct CreateUserRequest { pub name: String, pub email: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct LoginRequest { pub name: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

#[derive(utoipa::ToSchema)]
pub struct UserDoc { pub id: i32, pub name: String, pub email: String }

#[derive(utoipa::ToSchema)]
pub struct OutcomeDoc { pub rows_affected: u64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::login,
        crate::routes::users::create_user,
        crate::routes::users::update_infos,
        crate::routes::users::update_password,
        crate::routes::users::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            CreateUserRequest,
            LoginRequest,
            UpdateUserRequest,
            UserDoc,
            OutcomeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "user")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_user_documents_both_parameters() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let params = doc["paths"]["/user/{id}"]["get"]["parameters"]
            .as_array()
            .expect("get /user/{id} parameters")
            .clone();

        let names: Vec<&str> = params.iter().filter_map(|p| p["name"].as_str()).collect();
        assert!(names.contains(&"id"));
        assert!(names.contains(&"requester"));

        let requester = params.iter().find(|p| p["name"] == "requester").unwrap();
        assert_eq!(requester["in"], "query");
        // Optional query param must not be marked required
        assert_ne!(requester["required"], true);
    }
}
