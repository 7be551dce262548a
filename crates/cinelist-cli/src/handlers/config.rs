use crate::context::ExecutionContext;
use crate::presentation::presenters::present_config;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer, StatusBadge};
use anyhow::Result;
use cinelist_runtime::Config;

pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    config.save_to(path)?;
    tracing::info!(path = %path.display(), "config file written");

    let renderer = ConsoleRenderer::new(ctx.json_mode(), ctx.display_options());
    renderer.render(
        CommandResultViewModel::new(present_config(&config, path))
            .with_badge(StatusBadge::success("Config file written")),
    )
}

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let renderer = ConsoleRenderer::new(ctx.json_mode(), ctx.display_options());
    renderer.render(CommandResultViewModel::new(present_config(
        ctx.config(),
        ctx.config_path(),
    )))
}
