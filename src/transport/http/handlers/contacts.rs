use crate::domain::ContactForm;
use crate::transport::http::types::{AppState, HttpError, PageQuery};
use crate::transport::http::view::render_contacts_page;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/",
    params(PageQuery),
    responses(
        (status = 200, description = "Contacts page", content_type = "text/html", body = String),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn index_handler(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Html<String>, HttpError> {
    let message = match query {
        Ok(Query(q)) => q.message.unwrap_or_default(),
        Err(e) => {
            debug!(error = %e, "ignoring unreadable query string");
            String::new()
        }
    };

    let page = state.contacts.page(message).await?;
    Ok(Html(render_contacts_page(&page)))
}

#[utoipa::path(
    post,
    path = "/",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Redirect to `/?message=...` with the outcome"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn submit_handler(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, HttpError> {
    // Pairs rather than a struct so a repeated key does not reject the body.
    let form = match form {
        Ok(Form(pairs)) => ContactForm::from_pairs(pairs),
        Err(e) => {
            debug!(error = %e, "unreadable form body, treating it as empty");
            ContactForm::default()
        }
    };

    let message = state.contacts.submit(&form).await?;
    Ok(redirect_with_message(message))
}

/// `302 Found` back to the page, carrying `message` in the query string.
pub fn redirect_with_message(message: &str) -> Response {
    let location = format!("/?message={}", urlencoding::encode(message));
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_is_302_with_encoded_message() {
        let resp = redirect_with_message("Missing contact id.");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/?message=Missing%20contact%20id."
        );
    }
}
