use crate::forms::item_form::{FormErrors, ItemForm};
use askama::Template;

/// The item entry page, empty or redisplayed with errors.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub form: &'a ItemForm,
    pub errors: &'a FormErrors,
    pub csrf_token: &'a str,
    pub max_len: usize,
}
