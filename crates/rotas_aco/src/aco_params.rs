#[derive(Clone, Debug)]
pub struct AcoParams {
    pub num_ants: usize,
    pub iterations: usize,

    /// Pheromone exponent
    pub alpha: f64,
    /// Heuristic exponent
    pub beta: f64,
    pub evaporation_rate: f64,

    pub distance_weight: f64,
    pub cost_weight: f64,
    pub time_weight: f64,

    /// How many tours each iteration contributes, and how many are returned
    pub best_routes: usize,
}

impl Default for AcoParams {
    fn default() -> Self {
        Self {
            num_ants: 10,
            iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            distance_weight: 0.5,
            cost_weight: 0.3,
            time_weight: 0.2,
            best_routes: 3,
        }
    }
}
