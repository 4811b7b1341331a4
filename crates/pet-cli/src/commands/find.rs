use pet_core::responses::PetListResponse;

use crate::commands::parse::split_csv;
use crate::context::AppContext;
use crate::output::output;

/// Which lookup a find command performs.
#[derive(Clone, Copy, Debug)]
pub enum Query<'a> {
    All,
    Id(i64),
    Status(&'a [String]),
    Tags(&'a [String]),
    Tag(&'a str),
}

pub fn build(query: Query<'_>, ctx: &AppContext) -> anyhow::Result<PetListResponse> {
    let pets = match query {
        Query::All => ctx.store.list_all()?,
        Query::Id(id) => ctx.store.find_by_id(id)?,
        Query::Status(raw) => ctx.store.find_by_status(&split_csv(raw))?,
        Query::Tags(raw) => ctx.store.find_by_tags(&split_csv(raw))?,
        Query::Tag(tag) => ctx.store.find_by_tag(tag)?,
    };
    Ok(PetListResponse::new(pets))
}

pub fn run(query: Query<'_>, ctx: &AppContext) -> anyhow::Result<()> {
    output(&build(query, ctx)?, ctx.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Query, build};
    use crate::context::AppContext;

    fn seeded() -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::for_path(dir.path().join("pets.json"));
        ctx.store.init().unwrap();
        let tags = |items: &[&str]| -> Option<Vec<String>> {
            Some(items.iter().map(ToString::to_string).collect())
        };
        ctx.store
            .add_new(
                "Rex",
                None,
                Some("available".into()),
                tags(&["dog", "friendly"]),
            )
            .unwrap();
        ctx.store
            .add_new("Tom", None, Some("sold".into()), tags(&["cat"]))
            .unwrap();
        ctx.store
            .add_new("Bo", None, Some("pending".into()), tags(&["dog"]))
            .unwrap();
        (dir, ctx)
    }

    fn names(query: Query<'_>, ctx: &AppContext) -> Vec<String> {
        build(query, ctx)
            .unwrap()
            .message
            .iter()
            .map(|pet| pet.name().to_string())
            .collect()
    }

    #[test]
    fn status_argument_is_comma_separated() {
        let (_dir, ctx) = seeded();
        let raw = vec!["available, pending".to_string()];
        assert_eq!(names(Query::Status(&raw), &ctx), vec!["Rex", "Bo"]);
    }

    #[test]
    fn tags_argument_requires_every_tag() {
        let (_dir, ctx) = seeded();
        let raw = vec!["dog,friendly".to_string()];
        assert_eq!(names(Query::Tags(&raw), &ctx), vec!["Rex"]);
        assert_eq!(names(Query::Tags(&[]), &ctx), vec!["Rex", "Tom", "Bo"]);
    }

    #[test]
    fn id_and_single_tag_lookups() {
        let (_dir, ctx) = seeded();
        assert_eq!(names(Query::Id(2), &ctx), vec!["Tom"]);
        assert!(names(Query::Id(9), &ctx).is_empty());
        assert_eq!(names(Query::Tag("dog"), &ctx), vec!["Rex", "Bo"]);
        assert_eq!(names(Query::All, &ctx).len(), 3);
    }
}
