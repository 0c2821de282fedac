pub mod aco_params;
pub mod alto_paranaiba;
pub mod ant_colony;
pub mod city_graph;
pub mod error;
pub mod tour;
