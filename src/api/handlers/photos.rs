use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::AppState;

/// Proxies `/api/photos/{code}.png` to the photo CDN; any failure is an empty 404
pub async fn get_photo(State(state): State<Arc<AppState>>, Path(file): Path<String>) -> Response {
    let Some(code) = parse_photo_code(&file) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.client.fetch_photo(code).await {
        Some(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn parse_photo_code(file: &str) -> Option<u64> {
    file.strip_suffix(".png")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_code_needs_png_suffix() {
        assert_eq!(parse_photo_code("118748.png"), Some(118748));
        assert_eq!(parse_photo_code("0.png"), Some(0));
        assert_eq!(parse_photo_code("118748"), None);
        assert_eq!(parse_photo_code("abc.png"), None);
    }
}
