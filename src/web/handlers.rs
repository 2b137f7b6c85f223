use crate::db::queries::{insert_item, load_items};
use crate::errors::AppResult;
use crate::forms::item_form::{FormErrors, ItemForm};
use crate::models::item::MAX_TEXT_LEN;
use crate::web::templates::IndexTemplate;
use crate::web::{AppState, SUCCESS_PATH, listing};
use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

/// GET / — empty entry form.
pub async fn show_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_form(&state, &ItemForm::default(), &FormErrors::default())
}

/// POST / — validate, insert one row, redirect to the listing.
/// Invalid input redisplays the form with the submitted values.
pub async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> AppResult<Response> {
    let valid = match form.validate(&state.csrf) {
        Ok(v) => v,
        Err(errors) => {
            tracing::debug!(?errors, "item form rejected");
            return Ok(render_form(&state, &form, &errors)?.into_response());
        }
    };

    let pool = state.db.clone();
    let item = tokio::task::spawn_blocking(move || {
        pool.with_session(|tx| insert_item(tx, &valid.into_new_item()))
    })
    .await??;

    tracing::info!(id = item.id, name = %item.name, quantity = item.quantity, "item added");

    Ok((StatusCode::FOUND, [(header::LOCATION, SUCCESS_PATH)]).into_response())
}

/// GET /success — every stored item as text.
pub async fn success(State(state): State<AppState>) -> AppResult<String> {
    let pool = state.db.clone();
    let items = tokio::task::spawn_blocking(move || pool.with_session(|tx| load_items(tx))).await??;

    Ok(listing::render(&items))
}

fn render_form(state: &AppState, form: &ItemForm, errors: &FormErrors) -> AppResult<Html<String>> {
    let csrf_token = state.csrf.issue();
    let page = IndexTemplate {
        form,
        errors,
        csrf_token: &csrf_token,
        max_len: MAX_TEXT_LEN,
    };
    Ok(Html(page.render()?))
}
