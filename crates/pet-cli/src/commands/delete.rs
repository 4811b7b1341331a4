use pet_core::responses::TextResponse;

use crate::context::AppContext;
use crate::output::output;

pub fn build(pet_id: i64, api_key: Option<&str>, ctx: &AppContext) -> anyhow::Result<TextResponse> {
    if api_key.is_some() {
        tracing::debug!(pet_id, "api key supplied; it is not checked");
    }
    let deleted = ctx.store.delete_pet(pet_id)?;
    Ok(TextResponse::deleted(deleted))
}

pub fn run(pet_id: i64, api_key: Option<&str>, ctx: &AppContext) -> anyhow::Result<()> {
    output(&build(pet_id, api_key, ctx)?, ctx.format)
}
