use rotas_aco::{city_graph::CityGraph, tour::Tour};
use serde::{Deserialize, Serialize};

pub trait FromGraph<T> {
    fn from_graph(value: T, graph: &CityGraph) -> Self;
}

/// A route as the front end renders it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonRoute {
    pub caminho: Vec<String>,
    pub distancia: f64,
    pub custo: f64,
    pub tempo: f64,
}

impl FromGraph<&Tour> for JsonRoute {
    fn from_graph(value: &Tour, graph: &CityGraph) -> Self {
        JsonRoute {
            caminho: value.path_names(graph),
            distancia: value.metrics.distance,
            custo: value.metrics.cost,
            tempo: value.metrics.time,
        }
    }
}

/// `[path, distance, cost, time]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonTour(pub Vec<String>, pub f64, pub f64, pub f64);

impl FromGraph<&Tour> for JsonTour {
    fn from_graph(value: &Tour, graph: &CityGraph) -> Self {
        JsonTour(
            value.path_names(graph),
            value.metrics.distance,
            value.metrics.cost,
            value.metrics.time,
        )
    }
}

#[cfg(test)]
mod tests {
    use rotas_aco::city_graph::{CityId, TravelMetrics};

    use super::*;

    #[test]
    fn test_tour_serializes_as_array() {
        let graph = CityGraph::new(["A", "B"]).unwrap();
        let tour = Tour {
            cities: vec![CityId::new(0), CityId::new(1), CityId::new(0)],
            metrics: TravelMetrics::new(740.0, 197.0, 13.8),
        };

        assert_eq!(
            serde_json::to_value(JsonTour::from_graph(&tour, &graph)).unwrap(),
            serde_json::json!([["A", "B", "A"], 740.0, 197.0, 13.8])
        );
        assert_eq!(
            serde_json::to_value(JsonRoute::from_graph(&tour, &graph)).unwrap(),
            serde_json::json!({
                "caminho": ["A", "B", "A"],
                "distancia": 740.0,
                "custo": 197.0,
                "tempo": 13.8
            })
        );
    }
}
