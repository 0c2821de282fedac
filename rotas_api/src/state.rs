use rotas_aco::{
    aco_params::AcoParams,
    ant_colony::{AntColony, ColonyRun, create_rng},
    city_graph::CityGraph,
    error::AcoError,
};

pub struct AppState {
    pub graph: CityGraph,
    pub params: AcoParams,

    /// Seeds every run when set, so equal requests get equal answers
    pub seed: Option<u64>,
}

impl AppState {
    pub fn solve(&self, origin: &str) -> Result<ColonyRun, AcoError> {
        let colony = AntColony::new(&self.graph, self.params.clone());
        let mut rng = create_rng(self.seed);

        colony.run(origin, &mut rng)
    }
}
