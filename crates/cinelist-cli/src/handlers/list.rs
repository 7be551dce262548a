use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_home, present_home_result};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use cinelist_engine::FilterCriteria;
use cinelist_runtime::Intent;

pub fn handle(ctx: &ExecutionContext, title: String, min_rating: &str) -> Result<()> {
    let min_rating = FilterCriteria::parse_min_rating(min_rating)?;

    let mut catalog = ctx.catalog()?;
    catalog.apply(Intent::SetTitleQuery(title))?;
    catalog.apply(Intent::SetMinRating(min_rating))?;

    let view_model = present_home(&catalog, ctx.placeholder_poster_url());
    tracing::debug!(
        showing = view_model.showing,
        total = view_model.total,
        "filters applied"
    );

    let renderer = ConsoleRenderer::new(ctx.json_mode(), ctx.display_options());
    renderer.render(present_home_result(view_model))
}
