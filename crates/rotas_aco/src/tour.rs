use std::cmp::Ordering;

use crate::city_graph::{CityGraph, CityId, TravelMetrics};

/// A closed tour: starts and ends at the same city.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub cities: Vec<CityId>,
    pub metrics: TravelMetrics,
}

impl Tour {
    pub fn path_names(&self, graph: &CityGraph) -> Vec<String> {
        self.cities
            .iter()
            .map(|&city| graph.name(city).to_string())
            .collect()
    }

    /// Orders by distance, then cost, then time.
    pub fn compare(&self, other: &Tour) -> Ordering {
        self.metrics
            .distance
            .total_cmp(&other.metrics.distance)
            .then(self.metrics.cost.total_cmp(&other.metrics.cost))
            .then(self.metrics.time.total_cmp(&other.metrics.time))
    }
}

/// The best tour found for each objective on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveBest {
    pub distance: Tour,
    pub cost: Tour,
    pub time: Tour,
}

impl ObjectiveBest {
    pub fn new(tour: &Tour) -> Self {
        Self {
            distance: tour.clone(),
            cost: tour.clone(),
            time: tour.clone(),
        }
    }

    pub fn update(&mut self, tour: &Tour) {
        if tour.metrics.distance < self.distance.metrics.distance {
            self.distance = tour.clone();
        }
        if tour.metrics.cost < self.cost.metrics.cost {
            self.cost = tour.clone();
        }
        if tour.metrics.time < self.time.metrics.time {
            self.time = tour.clone();
        }
    }
}
