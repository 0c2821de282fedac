use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    aco_params::AcoParams,
    city_graph::{CityGraph, CityId, TravelMetrics},
    error::AcoError,
    tour::{ObjectiveBest, Tour},
};

pub fn create_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

#[derive(Debug, Clone)]
pub struct ColonyRun {
    /// Best distinct tours, ordered by distance, cost and time
    pub best_routes: Vec<Tour>,

    /// `None` when no ant completed a tour
    pub by_objective: Option<ObjectiveBest>,
}

/// Ant colony optimisation over a [`CityGraph`]: every ant leaves the origin,
/// visits all other cities once and comes back.
pub struct AntColony<'a> {
    graph: &'a CityGraph,
    params: AcoParams,
}

impl<'a> AntColony<'a> {
    pub fn new(graph: &'a CityGraph, params: AcoParams) -> Self {
        Self { graph, params }
    }

    #[instrument(skip(self, rng), level = "debug")]
    pub fn run<R: Rng>(&self, origin: &str, rng: &mut R) -> Result<ColonyRun, AcoError> {
        let origin = self.graph.city_id(origin)?;

        let mut pheromone = vec![1.0; self.graph.num_cities() * self.graph.num_cities()];
        let mut evaporation_rate = self.params.evaporation_rate;

        let mut candidates: Vec<Tour> = Vec::new();
        let mut by_objective: Option<ObjectiveBest> = None;

        for iteration in 0..self.params.iterations {
            let mut tours: Vec<Tour> = (0..self.params.num_ants)
                .filter_map(|_| self.construct_tour(origin, &pheromone, rng))
                .collect();

            for tour in &tours {
                match by_objective.as_mut() {
                    Some(best) => best.update(tour),
                    None => by_objective = Some(ObjectiveBest::new(tour)),
                }
            }

            evaporation_rate =
                self.update_pheromone(&mut pheromone, &tours, evaporation_rate);

            tours.sort_by(Tour::compare);
            if let Some(best) = tours.first() {
                debug!(
                    "Iteration {}: {} tours, best distance {}, evaporation {:.4}",
                    iteration,
                    tours.len(),
                    best.metrics.distance,
                    evaporation_rate
                );
            }
            candidates.extend(tours.into_iter().take(self.params.best_routes));
        }

        candidates.sort_by(Tour::compare);

        let mut best_routes: Vec<Tour> = Vec::with_capacity(self.params.best_routes);
        for tour in candidates {
            if best_routes.len() == self.params.best_routes {
                break;
            }
            if !best_routes.iter().any(|kept| kept.cities == tour.cities) {
                best_routes.push(tour);
            }
        }

        Ok(ColonyRun {
            best_routes,
            by_objective,
        })
    }

    /// `None` when the ant gets stuck on a city with no unvisited neighbour,
    /// or cannot get back to the origin.
    fn construct_tour<R: Rng>(
        &self,
        origin: CityId,
        pheromone: &[f64],
        rng: &mut R,
    ) -> Option<Tour> {
        let mut cities = vec![origin];
        let mut unvisited: Vec<CityId> = self.graph.city_ids().filter(|&c| c != origin).collect();
        let mut metrics = TravelMetrics::default();

        while !unvisited.is_empty() {
            let current = cities[cities.len() - 1];
            let probabilities = self.probabilities(current, &unvisited, pheromone);
            let next = choose_next_city(&probabilities, rng)?;

            metrics += self.graph.edge(current, next)?;
            cities.push(next);
            unvisited.retain(|&c| c != next);
        }

        let last = cities[cities.len() - 1];
        if last != origin {
            metrics += self.graph.edge(last, origin)?;
        }
        cities.push(origin);

        Some(Tour { cities, metrics })
    }

    /// Selection probability of each reachable unvisited city. When every
    /// weight is zero, all reachable cities are equally likely.
    fn probabilities(
        &self,
        current: CityId,
        unvisited: &[CityId],
        pheromone: &[f64],
    ) -> Vec<(CityId, f64)> {
        let params = &self.params;

        let weights: Vec<(CityId, f64)> = unvisited
            .iter()
            .filter_map(|&city| {
                let edge = self.graph.edge(current, city)?;
                let attractiveness = params.distance_weight * heuristic(edge.distance, params.beta)
                    + params.cost_weight * heuristic(edge.cost, params.beta)
                    + params.time_weight * heuristic(edge.time, params.beta);
                let trail = pheromone[self.graph.edge_index(current, city)].powf(params.alpha);

                Some((city, trail * attractiveness))
            })
            .collect();

        let total: f64 = weights.iter().map(|(_, weight)| weight).sum();

        if total > 0.0 && total.is_finite() {
            weights
                .into_iter()
                .map(|(city, weight)| (city, weight / total))
                .collect()
        } else {
            let uniform = 1.0 / weights.len() as f64;
            weights.into_iter().map(|(city, _)| (city, uniform)).collect()
        }
    }

    /// Evaporates every trail, lets each tour deposit `1 / (d + c + t)` on the
    /// edges it used, and returns the adapted evaporation rate.
    fn update_pheromone(&self, pheromone: &mut [f64], tours: &[Tour], evaporation_rate: f64) -> f64 {
        for trail in pheromone.iter_mut() {
            *trail *= 1.0 - evaporation_rate;
        }

        for tour in tours {
            let total = tour.metrics.sum();
            if total <= 0.0 {
                continue;
            }

            for leg in tour.cities.windows(2) {
                pheromone[self.graph.edge_index(leg[0], leg[1])] += 1.0 / total;
            }
        }

        if tours.len() as f64 > self.params.num_ants as f64 / 2.0 {
            evaporation_rate * 0.95
        } else {
            evaporation_rate * 1.05
        }
    }
}

fn heuristic(metric: f64, beta: f64) -> f64 {
    (1.0 / metric.max(f64::EPSILON)).powf(beta)
}

fn choose_next_city<R: Rng>(probabilities: &[(CityId, f64)], rng: &mut R) -> Option<CityId> {
    let threshold: f64 = rng.random();
    let mut cumulative = 0.0;

    for &(city, probability) in probabilities {
        cumulative += probability;
        if threshold <= cumulative {
            return Some(city);
        }
    }

    probabilities.last().map(|&(city, _)| city)
}
