//! CLI runner - executes commands

use crate::cli::commands::{BrowseCommand, Cli, Commands, OutputFormat};
use crate::config::{ClientConfig, ENDPOINT_ENV};
use crate::error::{Error, Result};
use crate::render::{render_view, PlainRenderer};
use crate::state::ViewState;
use crate::types::SortOrder;
use crate::view::RestaurantListView;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let view = RestaurantListView::from_config(&self.load_config()?)?;
        match &self.cli.command {
            Commands::List { search, ordering } => {
                self.list(&view, search.as_deref(), *ordering).await
            }
            Commands::Browse => self.browse(&view).await,
        }
    }

    /// Resolve configuration: file, then environment, then flags
    fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        let config = config
            .with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
            .with_endpoint_override(self.cli.endpoint.clone());
        config.validate()?;
        debug!("Using endpoint {}", config.endpoint);
        Ok(config)
    }

    /// Load one page and print it
    async fn list(
        &self,
        view: &RestaurantListView,
        search: Option<&str>,
        ordering: Option<SortOrder>,
    ) -> Result<()> {
        let handle = if search.is_some() || ordering.is_some() {
            view.set_search(search.unwrap_or_default()).await;
            view.set_ordering(ordering.unwrap_or_default()).await;
            view.submit_search().await
        } else {
            view.mount()
        };
        join(handle).await?;

        self.print(&view.snapshot().await)
    }

    /// Interactive session: re-render on every applied page
    async fn browse(&self, view: &RestaurantListView) -> Result<()> {
        let mut revision = view.subscribe();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        // Detached: the revision watch reports completion
        drop(view.mount());
        println!("{}", BrowseCommand::help());

        loop {
            tokio::select! {
                changed = revision.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.print(&view.snapshot().await)?;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    match BrowseCommand::parse(&line) {
                        Ok(BrowseCommand::Quit) => break,
                        Ok(command) => self.dispatch(view, command).await?,
                        Err(e) => eprintln!("{e}"),
                    }
                }
            }
        }

        Ok(())
    }

    async fn dispatch(&self, view: &RestaurantListView, command: BrowseCommand) -> Result<()> {
        match command {
            BrowseCommand::Search(text) => view.set_search(text).await,
            BrowseCommand::Order(ordering) => {
                view.set_ordering(ordering).await;
                println!("Ordenação: {}", ordering.label());
            }
            BrowseCommand::Submit => drop(view.submit_search().await),
            BrowseCommand::Next => {
                if view.next().await.is_none() {
                    println!("Não há próxima página");
                }
            }
            BrowseCommand::Previous => {
                if view.previous().await.is_none() {
                    println!("Não há página anterior");
                }
            }
            BrowseCommand::Show => self.print(&view.snapshot().await)?,
            BrowseCommand::Help => println!("{}", BrowseCommand::help()),
            BrowseCommand::Quit => {}
        }
        Ok(())
    }

    fn print(&self, state: &ViewState) -> Result<()> {
        match self.cli.format {
            OutputFormat::Pretty => println!("{}\n", render_view(state, &PlainRenderer)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state)?),
        }
        Ok(())
    }
}

async fn join(handle: JoinHandle<()>) -> Result<()> {
    handle
        .await
        .map_err(|e| Error::Other(format!("Load task failed: {e}")))
}
