use fxhash::FxHashMap;

use crate::error::AcoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(usize);

impl CityId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// Distance (km), cost (R$) and time (hours) of travelling along an edge,
/// or the totals of a whole tour.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TravelMetrics {
    pub distance: f64,
    pub cost: f64,
    pub time: f64,
}

impl TravelMetrics {
    pub fn new(distance: f64, cost: f64, time: f64) -> Self {
        Self {
            distance,
            cost,
            time,
        }
    }

    pub fn sum(&self) -> f64 {
        self.distance + self.cost + self.time
    }
}

impl std::ops::AddAssign for TravelMetrics {
    fn add_assign(&mut self, rhs: Self) {
        self.distance += rhs.distance;
        self.cost += rhs.cost;
        self.time += rhs.time;
    }
}

/// Named cities joined by undirected edges.
///
/// Edges are stored as a dense `n * n` matrix; both directions of an edge
/// always carry the same metrics.
#[derive(Debug, Clone)]
pub struct CityGraph {
    names: Vec<String>,
    ids: FxHashMap<String, CityId>,
    edges: Vec<Option<TravelMetrics>>,
}

impl CityGraph {
    pub fn new<S: Into<String>>(cities: impl IntoIterator<Item = S>) -> Result<Self, AcoError> {
        let mut names = Vec::new();
        let mut ids = FxHashMap::default();

        for city in cities {
            let city = city.into();
            if ids.contains_key(&city) {
                return Err(AcoError::DuplicateCity(city));
            }
            ids.insert(city.clone(), CityId(names.len()));
            names.push(city);
        }

        let num_cities = names.len();
        Ok(Self {
            names,
            ids,
            edges: vec![None; num_cities * num_cities],
        })
    }

    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        metrics: TravelMetrics,
    ) -> Result<(), AcoError> {
        let from = self.city_id(from)?;
        let to = self.city_id(to)?;

        let from_to = self.edge_index(from, to);
        let to_from = self.edge_index(to, from);
        self.edges[from_to] = Some(metrics);
        self.edges[to_from] = Some(metrics);

        Ok(())
    }

    pub fn city_id(&self, name: &str) -> Result<CityId, AcoError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| AcoError::UnknownCity(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn name(&self, id: CityId) -> &str {
        &self.names[id.get()]
    }

    pub fn num_cities(&self) -> usize {
        self.names.len()
    }

    pub fn city_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.names.len()).map(CityId)
    }

    pub fn edge(&self, from: CityId, to: CityId) -> Option<TravelMetrics> {
        self.edges[self.edge_index(from, to)]
    }

    pub fn num_edges(&self) -> usize {
        self.edges.iter().filter(|edge| edge.is_some()).count() / 2
    }

    pub(crate) fn edge_index(&self, from: CityId, to: CityId) -> usize {
        from.get() * self.names.len() + to.get()
    }
}
