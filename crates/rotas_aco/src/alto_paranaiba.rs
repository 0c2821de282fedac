//! Road network between the cities of the Alto Paranaíba region.

use crate::{
    city_graph::{CityGraph, TravelMetrics},
    error::AcoError,
};

pub const DEFAULT_ORIGIN: &str = "Patrocinio";

pub const CITIES: [&str; 11] = [
    "Patrocinio",
    "Araxa",
    "Uberlandia",
    "Serra do Salitre",
    "Monte Carmelo",
    "Coromandel",
    "Carmo do Paranaiba",
    "Rio Paranaiba",
    "Guimarania",
    "Perdizes",
    "Patos de Minas",
];

/// `(from, to, distance km, cost R$, time h)`
const ROADS: [(&str, &str, f64, f64, f64); 55] = [
    ("Patrocinio", "Araxa", 100.0, 40.0, 2.0),
    ("Patrocinio", "Uberlandia", 150.0, 60.0, 2.5),
    ("Patrocinio", "Serra do Salitre", 50.0, 20.0, 1.0),
    ("Patrocinio", "Monte Carmelo", 80.0, 30.0, 1.5),
    ("Patrocinio", "Coromandel", 120.0, 45.0, 2.0),
    ("Patrocinio", "Carmo do Paranaiba", 90.0, 35.0, 1.7),
    ("Patrocinio", "Rio Paranaiba", 110.0, 35.0, 2.0),
    ("Patrocinio", "Guimarania", 140.0, 50.0, 2.3),
    ("Patrocinio", "Perdizes", 130.0, 50.0, 2.3),
    ("Patrocinio", "Patos de Minas", 70.0, 50.0, 3.0),
    ("Araxa", "Uberlandia", 110.0, 45.0, 2.2),
    ("Araxa", "Serra do Salitre", 40.0, 18.0, 0.9),
    ("Araxa", "Monte Carmelo", 60.0, 20.0, 1.2),
    ("Araxa", "Coromandel", 90.0, 30.0, 1.5),
    ("Araxa", "Carmo do Paranaiba", 70.0, 25.0, 1.3),
    ("Araxa", "Rio Paranaiba", 85.0, 30.0, 1.6),
    ("Araxa", "Guimarania", 130.0, 55.0, 2.4),
    ("Araxa", "Perdizes", 120.0, 45.0, 2.1),
    ("Araxa", "Patos de Minas", 160.0, 65.0, 2.7),
    ("Uberlandia", "Serra do Salitre", 60.0, 25.0, 1.3),
    ("Uberlandia", "Monte Carmelo", 100.0, 40.0, 2.0),
    ("Uberlandia", "Coromandel", 130.0, 50.0, 2.2),
    ("Uberlandia", "Carmo do Paranaiba", 110.0, 35.0, 2.1),
    ("Uberlandia", "Rio Paranaiba", 120.0, 40.0, 2.3),
    ("Uberlandia", "Guimarania", 160.0, 60.0, 2.9),
    ("Uberlandia", "Perdizes", 150.0, 55.0, 2.5),
    ("Uberlandia", "Patos de Minas", 200.0, 70.0, 3.5),
    ("Serra do Salitre", "Monte Carmelo", 30.0, 15.0, 0.8),
    ("Serra do Salitre", "Coromandel", 70.0, 30.0, 1.2),
    ("Serra do Salitre", "Carmo do Paranaiba", 60.0, 20.0, 1.0),
    ("Serra do Salitre", "Rio Paranaiba", 75.0, 25.0, 1.4),
    ("Serra do Salitre", "Guimarania", 100.0, 35.0, 1.7),
    ("Serra do Salitre", "Perdizes", 90.0, 35.0, 1.5),
    ("Serra do Salitre", "Patos de Minas", 140.0, 50.0, 2.4),
    ("Monte Carmelo", "Coromandel", 50.0, 20.0, 1.0),
    ("Monte Carmelo", "Carmo do Paranaiba", 40.0, 15.0, 0.9),
    ("Monte Carmelo", "Rio Paranaiba", 60.0, 25.0, 1.3),
    ("Monte Carmelo", "Guimarania", 90.0, 30.0, 1.7),
    ("Monte Carmelo", "Perdizes", 80.0, 28.0, 1.5),
    ("Monte Carmelo", "Patos de Minas", 130.0, 50.0, 2.5),
    ("Coromandel", "Carmo do Paranaiba", 50.0, 20.0, 1.2),
    ("Coromandel", "Rio Paranaiba", 70.0, 25.0, 1.4),
    ("Coromandel", "Guimarania", 100.0, 35.0, 2.1),
    ("Coromandel", "Perdizes", 90.0, 35.0, 1.9),
    ("Coromandel", "Patos de Minas", 140.0, 55.0, 2.6),
    ("Carmo do Paranaiba", "Rio Paranaiba", 50.0, 18.0, 1.1),
    ("Carmo do Paranaiba", "Guimarania", 80.0, 28.0, 1.5),
    ("Carmo do Paranaiba", "Perdizes", 70.0, 25.0, 1.4),
    ("Carmo do Paranaiba", "Patos de Minas", 120.0, 40.0, 2.3),
    ("Rio Paranaiba", "Guimarania", 90.0, 35.0, 1.7),
    ("Rio Paranaiba", "Perdizes", 80.0, 28.0, 1.5),
    ("Rio Paranaiba", "Patos de Minas", 130.0, 45.0, 2.3),
    ("Guimarania", "Perdizes", 60.0, 20.0, 1.2),
    ("Guimarania", "Patos de Minas", 110.0, 35.0, 1.9),
    ("Perdizes", "Patos de Minas", 150.0, 60.0, 2.8),
];

pub fn alto_paranaiba() -> Result<CityGraph, AcoError> {
    let mut graph = CityGraph::new(CITIES)?;

    for (from, to, distance, cost, time) in ROADS {
        graph.add_edge(from, to, TravelMetrics::new(distance, cost, time))?;
    }

    Ok(graph)
}
