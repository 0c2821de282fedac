use std::fmt;

use serde::de::Error as _;
use serde_json::{Map, Value};

/// A route member exactly as the server sent it.
///
/// Numbers print without a trailing `.0`, strings print raw and a member
/// the server left out prints as `undefined`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteValue(Option<Value>);

impl From<f64> for RouteValue {
    fn from(value: f64) -> Self {
        Self(serde_json::Number::from_f64(value).map(Value::Number))
    }
}

impl From<Value> for RouteValue {
    fn from(value: Value) -> Self {
        Self(Some(value))
    }
}

impl fmt::Display for RouteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("undefined"),
            Some(value) => write_value(f, value),
        }
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(flag) => write!(f, "{}", flag),
        Value::Number(number) => match number.as_f64() {
            Some(number) => write!(f, "{}", number),
            None => write!(f, "{}", number),
        },
        Value::String(text) => f.write_str(text),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    f.write_str(",")?;
                }
                write_path_item(f, item)?;
            }
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]"),
    }
}

/// Inside arrays null renders as nothing.
fn write_path_item(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => Ok(()),
        value => write_value(f, value),
    }
}

/// A single route computed by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// `caminho`, the waypoint names in order
    pub path: Vec<String>,
    /// `distancia`, in km
    pub distance: RouteValue,
    /// `custo`, in R$
    pub cost: RouteValue,
    /// `tempo`, in hours
    pub time: RouteValue,
}

impl RouteResult {
    /// Only `caminho` has to be a list, every other member is taken as is.
    fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        let route = value
            .as_object()
            .ok_or_else(|| serde_json::Error::custom(format!("route is not an object: {}", value)))?;

        let path = route
            .get("caminho")
            .and_then(Value::as_array)
            .ok_or_else(|| serde_json::Error::custom("route has no `caminho` list"))?
            .iter()
            .map(|waypoint| match waypoint {
                Value::Null => String::new(),
                waypoint => RouteValue::from(waypoint.clone()).to_string(),
            })
            .collect();

        Ok(Self {
            path,
            distance: member(route, "distancia"),
            cost: member(route, "custo"),
            time: member(route, "tempo"),
        })
    }
}

fn member(route: &Map<String, Value>, key: &str) -> RouteValue {
    route
        .get(key)
        .cloned()
        .map(RouteValue::from)
        .unwrap_or_default()
}

/// Parsed server payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteResponse {
    /// `rotas`
    pub routes: Vec<RouteResult>,
}

impl RouteResponse {
    /// Parses any JSON document the endpoint may answer with.
    ///
    /// Only a non-empty `rotas` list yields routes. Anything else (no
    /// `rotas`, `null`, `false`, `0`, `""`, `{}`, error bodies, scalars) is an
    /// empty response. The body is an error when it is not JSON, when `rotas`
    /// is a non-empty string, or when a listed route has no `caminho` list.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_slice(body)?;

        let routes = match document.get("rotas") {
            Some(Value::Array(routes)) => routes
                .iter()
                .map(RouteResult::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            Some(Value::String(text)) if !text.is_empty() => {
                return Err(serde_json::Error::custom("`rotas` is a string, not a list"));
            }
            _ => Vec::new(),
        };

        Ok(Self { routes })
    }

    pub fn has_routes(&self) -> bool {
        !self.routes.is_empty()
    }
}
