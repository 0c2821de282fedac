use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, error, instrument};

use crate::{
    route_block::{FETCH_ERROR_ALERT, NO_ROUTES_MESSAGE, RouteBlock},
    route_client::RouteTransport,
    route_query::RouteQuery,
    route_response::RouteResponse,
    surface::{ResultContainer, RouteForm, SubmitEvent, UserAlert},
};

/// What a submission ended up doing to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The container was replaced with this many route blocks.
    Rendered(usize),
    /// The container was replaced with the no-routes message.
    NoRoutes,
    /// The request or the parsing failed; only the alert was raised.
    Failed,
}

/// Bridges a form submission to one route request and one rendering pass.
///
/// Overlapping submissions are not sequenced: each one renders when its own
/// response settles, so a slow earlier request can overwrite a later one.
pub struct RouteRequestHandler<T, F, C, A> {
    transport: T,
    form: F,
    container: Mutex<C>,
    alert: A,
    submissions: AtomicU64,
}

impl<T, F, C, A> RouteRequestHandler<T, F, C, A>
where
    T: RouteTransport,
    F: RouteForm,
    C: ResultContainer,
    A: UserAlert,
{
    pub fn new(transport: T, form: F, container: C, alert: A) -> Self {
        Self {
            transport,
            form,
            container: Mutex::new(container),
            alert,
            submissions: AtomicU64::new(0),
        }
    }

    #[instrument(skip_all)]
    pub async fn handle_submit<E: SubmitEvent>(&self, event: &mut E) -> SubmitOutcome {
        event.prevent_default();

        let submission = self.submissions.fetch_add(1, Ordering::Relaxed) + 1;
        let query = RouteQuery {
            origin: self.form.origin(),
            destination: self.form.destination(),
        };
        debug!(
            submission,
            "Requesting routes from {:?} to {:?}", query.origin, query.destination
        );

        match self.transport.fetch_routes(&query).await {
            Ok(response) => self.render(&response),
            Err(err) => {
                error!("Erro ao buscar rotas: {}", err);
                self.alert.alert(FETCH_ERROR_ALERT);
                SubmitOutcome::Failed
            }
        }
    }

    fn render(&self, response: &RouteResponse) -> SubmitOutcome {
        let mut container = self.container.lock();
        container.clear();

        if !response.has_routes() {
            container.show_message(NO_ROUTES_MESSAGE);
            return SubmitOutcome::NoRoutes;
        }

        for block in RouteBlock::from_routes(&response.routes) {
            container.append_block(block);
        }

        SubmitOutcome::Rendered(response.routes.len())
    }

    pub fn container(&self) -> MutexGuard<'_, C> {
        self.container.lock()
    }

    pub fn into_container(self) -> C {
        self.container.into_inner()
    }
}
