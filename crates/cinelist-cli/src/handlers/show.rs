use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_detail, present_detail_result};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use cinelist_runtime::{Intent, Route, RouteParams};
use cinelist_types::MovieId;

pub fn handle(ctx: &ExecutionContext, id: u64) -> Result<()> {
    let id = MovieId::new(id);

    let mut catalog = ctx.catalog()?;
    catalog.apply(Intent::Navigate {
        route: Route::Detail,
        params: RouteParams::movie(id),
    })?;

    let view_model = present_detail(&catalog, Some(id), ctx.placeholder_poster_url());
    if view_model.is_not_found() {
        tracing::warn!(id = %id, "movie not found");
    }

    let renderer = ConsoleRenderer::new(ctx.json_mode(), ctx.display_options());
    renderer.render(present_detail_result(view_model))
}
