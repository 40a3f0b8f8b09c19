pub mod orders;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(orders::create_order, orders::get_order),
    tags((name = "orders", description = "Order placement"))
)]
pub struct ApiDoc;
