use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Одна строка лога на запрос: время, длительность, размер ответа, статус, метод, путь
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Тело читаем целиком, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} {} | {}ms | body error: {}",
                parts.status.as_u16(),
                method,
                path,
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::empty());
        }
    };

    tracing::info!(
        "{} | {} {} {} | {}ms | {} bytes",
        Local::now().format("%H:%M:%S"),
        parts.status.as_u16(),
        method,
        path,
        start.elapsed().as_millis(),
        bytes.len()
    );

    Response::from_parts(parts, Body::from(bytes))
}
