//! CLI command implementations

use billboard_content::{ContentBlockBuilder, ContentBlockRequest, normalize_query};
use billboard_core::config::BillboardConfig;
use billboard_search::{
    AudienceType, Event, EventSearchService, SearchQuery, SortDirection,
};
use billboard_web::{AppState, WebServerConfig, run_server};
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search events and print the results
    Search {
        /// Raw query; comma-separated terms are AND-joined
        query: String,
        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Field to sort on
        #[arg(long)]
        sort: Option<String>,
        /// Sort direction
        #[arg(long, default_value = "desc")]
        direction: SortDirection,
        /// Use canned fixture data instead of the remote API
        #[arg(long)]
        demo: bool,
    },
    /// Build a content block and print it as JSON
    Render {
        /// Title to display
        #[arg(long, default_value = "")]
        title: String,
        /// Raw comma-separated search query
        #[arg(long, default_value = "")]
        query: String,
        /// View mode of the items to display
        #[arg(long, default_value = "teaser")]
        view_mode: String,
        /// Maximum number of items
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Field to sort on
        #[arg(long)]
        sort: Option<String>,
        /// Sort direction
        #[arg(long, default_value = "desc")]
        sort_direction: SortDirection,
        /// Custom more-link target; switches off the generated link
        #[arg(long)]
        more_link: Option<String>,
        /// Use canned fixture data instead of the remote API
        #[arg(long)]
        demo: bool,
    },
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Use canned fixture data instead of the remote API
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Search {
            query,
            limit,
            sort,
            direction,
            demo,
        } => search_events(query, limit, sort, direction, demo).await,
        Commands::Render {
            title,
            query,
            view_mode,
            limit,
            sort,
            sort_direction,
            more_link,
            demo,
        } => {
            render_block(
                title,
                query,
                view_mode,
                limit,
                sort,
                sort_direction,
                more_link,
                demo,
            )
            .await
        }
        Commands::Serve { host, port, demo } => serve(host, port, demo).await,
    }
}

fn search_service(config: &BillboardConfig, demo: bool) -> EventSearchService {
    if demo {
        EventSearchService::new_fixture()
    } else {
        EventSearchService::new(&config.search)
    }
}

/// Run a search and print a result listing
async fn search_events(
    query: String,
    limit: usize,
    sort: Option<String>,
    direction: SortDirection,
    demo: bool,
) -> anyhow::Result<()> {
    let config = BillboardConfig::default();
    let service = search_service(&config, demo);

    let mut search_query = SearchQuery::new(true)
        .with_query(normalize_query(&query))
        .with_audience(AudienceType::Everyone)
        .with_limit(limit);

    if let Some(field) = sort {
        search_query = search_query.with_sort(field, direction);
    }

    let results = service.search_events(&search_query).await?;

    println!("Event Search");
    println!("{:-<60}", "");

    if results.is_empty() {
        println!("No events matched the query.");
        return Ok(());
    }

    for event in results.items() {
        println!("{}", format_event_line(event));
    }

    println!();
    println!(
        "Showing {} of {} matching events.",
        results.items().len(),
        results.total_items
    );

    Ok(())
}

/// Build one content block and print it as pretty JSON
async fn render_block(
    title: String,
    query: String,
    view_mode: String,
    limit: usize,
    sort: Option<String>,
    sort_direction: SortDirection,
    more_link: Option<String>,
    demo: bool,
) -> anyhow::Result<()> {
    let config = BillboardConfig::default();
    let builder = ContentBlockBuilder::new(search_service(&config, demo), config.content);

    let request = ContentBlockRequest {
        title,
        query,
        view_mode,
        limit,
        sort,
        sort_direction,
        default_more_link: more_link.is_none(),
        more_link: more_link.unwrap_or_default(),
    };

    let block = builder.build(request).await;
    println!("{}", serde_json::to_string_pretty(&block)?);

    Ok(())
}

/// Start the web server for API access
async fn serve(host: String, port: u16, demo: bool) -> anyhow::Result<()> {
    let config = BillboardConfig::default();

    let state = if demo {
        AppState::new_fixture(&config)
    } else {
        AppState::new(&config)
    };

    let mut web_config = WebServerConfig::default();
    web_config.bind_address = format!("{host}:{port}").parse()?;

    println!("Billboard web server");
    println!("URL: http://{host}:{port}");
    println!("Content blocks: http://{host}:{port}/api/content-block");
    println!("Search: http://{host}:{port}/api/search");
    if demo {
        println!("Mode: Demo (using fixture data)");
    }
    println!("{:-<50}", "");
    println!("Press Ctrl+C to stop the server");

    run_server(web_config, state).await?;

    Ok(())
}

/// One listing line per event: date, name, venue.
fn format_event_line(event: &Event) -> String {
    let date = event
        .start_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "date TBA".to_string());
    let location = event.location.as_deref().unwrap_or("location unknown");

    format!("{date}  {} ({location})", event.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str) -> Event {
        Event {
            id: "e1".to_string(),
            name: name.to_string(),
            description: None,
            start_date: None,
            end_date: None,
            location: None,
            image: None,
            url: None,
        }
    }

    #[test]
    fn event_line_includes_date_and_location() {
        let mut event = event("Jazz Night");
        event.start_date = Some("2026-09-01T19:00:00Z".parse().unwrap());
        event.location = Some("De Roma".to_string());

        assert_eq!(format_event_line(&event), "2026-09-01  Jazz Night (De Roma)");
    }

    #[test]
    fn event_line_degrades_without_date_and_location() {
        assert_eq!(
            format_event_line(&event("Jazz Night")),
            "date TBA  Jazz Night (location unknown)"
        );
    }

    #[tokio::test]
    async fn render_with_demo_data_succeeds() {
        let result = render_block(
            "Concerts".to_string(),
            "jazz".to_string(),
            "teaser".to_string(),
            2,
            None,
            SortDirection::Desc,
            None,
            true,
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn search_with_demo_data_succeeds() {
        let result =
            search_events("jazz".to_string(), 2, None, SortDirection::Desc, true).await;

        assert!(result.is_ok());
    }
}
