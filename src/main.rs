//! Grid Table Demo - Main Entry Point
//!
//! Runs the client-side and server-side user directory stories and prints the grid.

use anyhow::Result;
use grid_table::components::composite::data_table::{
    render_footer, render_header, render_plain_text,
};
use grid_table::domain::SortSpec;
use grid_table::eventing::GridCommand;
use grid_table::features::demo::{ClientSideStory, ServerSideStory};
use grid_table::services::runtime;
use grid_table::state::TableManager;
use grid_table::utils::{default_config_path, load_config_or_default};

const DEMO_ROWS: usize = 120;

fn print_grid(title: &str, table_manager: &TableManager) {
    println!("== {title} ==");
    println!("{}", render_plain_text(table_manager));
    println!("{}", render_footer(table_manager).text_content());
    println!();
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Grid Table demo...");

    let config = load_config_or_default(&default_config_path()?)?;

    let client_config = config.clone();
    runtime::block_on(async move {
        let mut story = ClientSideStory::start(client_config, DEMO_ROWS).await?;
        let tm = story.table.table_manager();
        println!("{}", render_header(&tm).text_content());
        print_grid("Client side", &tm);

        story.run([
            GridCommand::SetSort(SortSpec::desc(8u32)),
            GridCommand::SetSearchText("female".into()),
        ])?;
        print_grid("Client side, female visitors by last visit", &story.table.table_manager());
        anyhow::Ok(())
    })??;

    runtime::block_on(async move {
        let mut story = ServerSideStory::start(config, DEMO_ROWS).await?;
        print_grid("Server side", &story.table.table_manager());

        story.run([GridCommand::SetSort(SortSpec::asc(4u32))]).await?;
        story.run([GridCommand::SetPage(2)]).await?;
        print_grid("Server side, page 2 by last name", &story.table.table_manager());
        anyhow::Ok(())
    })??;

    Ok(())
}
