use pet_core::responses::TextResponse;

use crate::context::AppContext;
use crate::output::output;

pub fn build(
    name: &str,
    description: Option<&str>,
    status: Option<&str>,
    tags: &[String],
    ctx: &AppContext,
) -> anyhow::Result<TextResponse> {
    // No `--tag` at all means "absent", which the pet defaults to [].
    let tags = (!tags.is_empty()).then(|| tags.to_vec());
    ctx.store.add_new(
        name,
        description.map(str::to_string),
        status.map(str::to_string),
        tags,
    )?;
    Ok(TextResponse::pet_added())
}

pub fn run(
    name: &str,
    description: Option<&str>,
    status: Option<&str>,
    tags: &[String],
    ctx: &AppContext,
) -> anyhow::Result<()> {
    output(&build(name, description, status, tags, ctx)?, ctx.format)
}
