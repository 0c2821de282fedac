use crate::route_response::RouteResult;

pub const NO_ROUTES_MESSAGE: &str = "Nenhuma rota encontrada.";
pub const FETCH_ERROR_ALERT: &str = "Erro ao buscar rotas. Tente novamente mais tarde.";
pub const PATH_SEPARATOR: &str = " → ";

/// The rendered form of one route, ready to be appended to a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBlock {
    pub label: String,
    pub path: String,
    pub distance: String,
    pub cost: String,
    pub time: String,
}

impl RouteBlock {
    /// `position` is 1-based.
    pub fn new(position: usize, route: &RouteResult) -> Self {
        Self {
            label: format!("Rota {}", position),
            path: route.path.join(PATH_SEPARATOR),
            distance: format!("{} km", route.distance),
            cost: format!("R${}", route.cost),
            time: format!("{} horas", route.time),
        }
    }

    pub fn from_routes(routes: &[RouteResult]) -> Vec<RouteBlock> {
        routes
            .iter()
            .enumerate()
            .map(|(index, route)| RouteBlock::new(index + 1, route))
            .collect()
    }
}
