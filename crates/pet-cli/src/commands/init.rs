use serde::Serialize;

use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub initialized: bool,
    pub path: String,
}

pub fn build(ctx: &AppContext) -> anyhow::Result<InitResponse> {
    let initialized = ctx.store.init()?;
    Ok(InitResponse {
        initialized,
        path: ctx.store.path().display().to_string(),
    })
}

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    output(&build(ctx)?, ctx.format)
}
