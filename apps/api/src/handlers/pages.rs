use axum::Json;

use crate::dto::MessageResponse;

pub async fn index_handler() -> Json<MessageResponse> {
    Json(MessageResponse { message: "index" })
}

pub async fn protected_view_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "view protected",
    })
}

pub async fn protected_create_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "create protected",
    })
}
