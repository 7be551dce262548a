use super::navigation;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_screen;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, route: &str, movie_id: Option<u64>) -> Result<()> {
    let mut catalog = ctx.catalog()?;
    catalog.apply(navigation(route, movie_id))?;

    if catalog.active_page().is_none() {
        tracing::debug!(route, "no page registered for route");
    }

    let screen = present_screen(&catalog, ctx.placeholder_poster_url());
    let renderer = ConsoleRenderer::new(ctx.json_mode(), ctx.display_options());
    renderer.render(CommandResultViewModel::new(screen))
}
