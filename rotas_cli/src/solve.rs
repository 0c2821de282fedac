use clap::Args;
use rotas_aco::{
    aco_params::AcoParams,
    alto_paranaiba::{DEFAULT_ORIGIN, alto_paranaiba},
    ant_colony::{AntColony, create_rng},
};
use rotas_client::{
    route_block::{NO_ROUTES_MESSAGE, RouteBlock},
    route_response::RouteResult,
    surface::ResultContainer,
};
use tracing::info;

use crate::terminal::TableContainer;

#[derive(Args)]
pub struct SolveArgs {
    /// City every tour starts and ends at
    #[arg(short, long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    #[arg(short, long)]
    ants: Option<usize>,

    /// Makes the run reproducible
    #[arg(short, long)]
    seed: Option<u64>,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let graph = alto_paranaiba()?;

    let defaults = AcoParams::default();
    let params = AcoParams {
        iterations: args.iterations.unwrap_or(defaults.iterations),
        num_ants: args.ants.unwrap_or(defaults.num_ants),
        ..defaults
    };

    let colony = AntColony::new(&graph, params);
    let mut rng = create_rng(args.seed);
    let run = colony.run(&args.origin, &mut rng)?;

    let routes: Vec<RouteResult> = run
        .best_routes
        .iter()
        .map(|tour| RouteResult {
            path: tour.path_names(&graph),
            distance: tour.metrics.distance.into(),
            cost: tour.metrics.cost.into(),
            time: tour.metrics.time.into(),
        })
        .collect();

    let mut container = TableContainer::default();
    if routes.is_empty() {
        container.show_message(NO_ROUTES_MESSAGE);
    } else {
        for block in RouteBlock::from_routes(&routes) {
            container.append_block(block);
        }
    }
    println!("{}", container.render());

    if let Some(best) = run.by_objective {
        info!(
            "Best distance = {} km, best cost = R${}, best time = {} horas",
            best.distance.metrics.distance, best.cost.metrics.cost, best.time.metrics.time
        );
    }

    Ok(())
}
