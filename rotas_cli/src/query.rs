use std::time::Duration;

use clap::Args;
use indicatif::ProgressBar;
use rotas_client::{
    route_client::{HttpRouteClient, RouteClientParams},
    route_request_handler::{RouteRequestHandler, SubmitOutcome},
    surface::{StaticForm, Submission},
};
use tracing::info;

use crate::terminal::{SpinnerAlert, TableContainer};

#[derive(Args)]
pub struct QueryArgs {
    /// Origin city, sent as `origem`
    #[arg(short, long, default_value = "")]
    origin: String,

    /// Destination city, sent as `destino`
    #[arg(short, long, default_value = "")]
    destination: String,

    /// Route endpoint, overrides ROTAS_ENDPOINT
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Request timeout in milliseconds, overrides ROTAS_REQUEST_TIMEOUT_MS
    #[arg(long)]
    timeout_ms: Option<u64>,
}

pub async fn run(args: QueryArgs) -> anyhow::Result<()> {
    let mut params = RouteClientParams::from_env()?;
    if let Some(endpoint) = args.endpoint {
        params.endpoint_url = endpoint;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        params.timeout = Some(Duration::from_millis(timeout_ms));
    }

    info!("Querying {}", params.endpoint_url);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Buscando rotas...");

    let handler = RouteRequestHandler::new(
        HttpRouteClient::new(params)?,
        StaticForm::new(args.origin, args.destination),
        TableContainer::default(),
        SpinnerAlert::new(spinner.clone()),
    );

    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = handler.handle_submit(&mut Submission::new()).await;

    spinner.finish_and_clear();

    match outcome {
        SubmitOutcome::Failed => Err(anyhow::anyhow!("Route request failed")),
        SubmitOutcome::Rendered(_) | SubmitOutcome::NoRoutes => {
            println!("{}", handler.container().render());
            Ok(())
        }
    }
}
