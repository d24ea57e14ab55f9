use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    DataResponse, IdPath, ValidatedJson, ValidationRejection,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{CreateProductPayload, UpdateProductPayload};

pub const TAG: &str = "Products";

/// Body of a successful delete
pub const PRODUCT_DELETED: &str = "Producto Eliminado";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        update_availability,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Api operations related to products")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(update_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// Get a list of products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Successful response", body = DataResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<DataResponse<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(DataResponse::new(products))
}

/// Creates a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(payload): ValidatedJson<CreateProductPayload>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(payload.into_create()).await?;
    Ok((StatusCode::CREATED, DataResponse::new(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "The ID of the product to retrieve")
    ),
    responses(
        (status = 200, description = "Successful response", body = DataResponse<Product>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<DataResponse<Product>> {
    let product = service.get_product(id).await?;
    Ok(DataResponse::new(product))
}

/// Updates a product with user input
///
/// Path and body problems are reported together.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "The ID of the product to update")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    id: Result<IdPath, ValidationRejection>,
    payload: Result<ValidatedJson<UpdateProductPayload>, ValidationRejection>,
) -> ProductResult<DataResponse<Product>> {
    let (IdPath(id), ValidatedJson(payload)) = ValidationRejection::combine(id, payload)?;
    let product = service.update_product(id, payload.into_update()).await?;
    Ok(DataResponse::new(product))
}

/// Toggles product availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "The ID of the product to update")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = DataResponse<Product>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<DataResponse<Product>> {
    let product = service.toggle_availability(id).await?;
    Ok(DataResponse::new(product))
}

/// Deletes a product by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "The ID of the product to delete")
    ),
    responses(
        (status = 200, description = "Producto Eliminado", body = DataResponse<String>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<DataResponse<&'static str>> {
    service.delete_product(id).await?;
    Ok(DataResponse::new(PRODUCT_DELETED))
}
