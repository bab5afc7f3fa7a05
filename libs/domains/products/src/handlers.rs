use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::validate::{enforce_rules, RuleViolation, ValidationErrorResponse};
use axum_helpers::{ErrorResponse, JsonBody};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::rules;
use crate::service::ProductService;

pub const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(schemas(
        Product,
        CreateProduct,
        UpdateProduct,
        ProductResponse,
        ProductListResponse,
        DeletedResponse,
        ErrorResponse,
        ValidationErrorResponse,
        RuleViolation,
    )),
    tags(
        (name = TAG, description = "API operations related to products")
    )
)]
pub struct ApiDoc;

/// Success envelope for a single product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

/// Success envelope for the product list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// Success envelope for a deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "The product was deleted")]
    pub data: String,
}

/// Create the product router with all HTTP endpoints.
///
/// Routes are grouped by the declarative rule list from [`crate::rules`]
/// guarding them; a handler only runs once every rule passed.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let service = Arc::new(service);

    let list_routes = Router::new().route("/", get(list_products));

    let create_routes = Router::new()
        .route("/", post(create_product))
        .layer(middleware::from_fn(enforce_rules(rules::CREATE_PRODUCT)));

    let by_id_routes = Router::new()
        .route(
            "/{id}",
            get(get_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .layer(middleware::from_fn(enforce_rules(rules::PRODUCT_ID)));

    let update_routes = Router::new()
        .route("/{id}", put(update_product))
        .layer(middleware::from_fn(enforce_rules(rules::UPDATE_PRODUCT)));

    list_routes
        .merge(create_routes)
        .merge(by_id_routes)
        .merge(update_routes)
        .with_state(service)
}

/// List all products, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of products ordered by id descending", body = ProductListResponse),
        (status = 500, description = "Unexpected persistence failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListResponse>> {
    let data = service.list_products().await?;
    Ok(Json(ProductListResponse { data }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Validation errors", body = ValidationErrorResponse),
        (status = 500, description = "Unexpected persistence failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse { data: product })))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Id of the product to retrieve")),
    responses(
        (status = 200, description = "The requested product", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_product(id).await?;
    Ok(Json(ProductResponse { data: product }))
}

/// Update a product by id (full overwrite)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Id of the product to update")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, description = "Validation errors", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
    JsonBody(input): JsonBody<UpdateProduct>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(ProductResponse { data: product }))
}

/// Toggle the availability of a product
///
/// No request body: each call flips the flag, so two consecutive calls
/// restore the original value.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Id of the product to toggle")),
    responses(
        (status = 200, description = "Product with availability flipped", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.toggle_availability(id).await?;
    Ok(Json(ProductResponse { data: product }))
}

/// Delete a product by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Id of the product to delete")),
    responses(
        (status = 200, description = "Product deleted successfully", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<DeletedResponse>> {
    service.delete_product(id).await?;
    Ok(Json(DeletedResponse {
        data: "The product was deleted".to_string(),
    }))
}
