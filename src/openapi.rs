use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Test API",
        description = "Test API Information",
        version = "1.0.0"
    ),
    paths(
        crate::catalog::handlers::api_info,
        crate::catalog::handlers::filter_movie,
        crate::catalog::handlers::box_office_movies,
        crate::catalog::handlers::recent_movies,
    ),
    components(schemas(
        crate::catalog::types::MovieEntry,
        crate::catalog::types::NotFoundBody,
        crate::catalog::types::ErrorBody,
        crate::catalog::types::ApiInfo,
    )),
    tags(
        (name = "catalog", description = "Movie catalog endpoints")
    )
)]
pub struct ApiDoc;
