use std::sync::Arc;

use tokio::sync::watch;

use cobro_models::{Pago, PagoFiltro};

use crate::error::ServiceError;
use crate::modules::pagos::PagoService;
use crate::store::{ListState, ListStore};

/// Holds the payment list the console currently displays.
#[derive(Clone)]
pub struct PagoStore {
    pub service: PagoService,
    lista: Arc<ListStore<Pago>>,
}

impl PagoStore {
    pub fn new(service: PagoService) -> Self {
        Self {
            service,
            lista: Arc::new(ListStore::new()),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> ListState<Pago> {
        self.lista.get()
    }

    /// Observes transitions as loads complete.
    pub fn subscribe(&self) -> watch::Receiver<ListState<Pago>> {
        self.lista.subscribe()
    }

    /// Reloads the list, publishing `Loading` first and then the outcome.
    pub async fn cargar(&self, filtro: &PagoFiltro) -> Result<Arc<Vec<Pago>>, ServiceError> {
        self.lista.set(ListState::Loading);
        match self.service.listar(filtro).await {
            Ok(filas) => {
                let filas = Arc::new(filas);
                self.lista.set(ListState::Ready(Arc::clone(&filas)));
                Ok(filas)
            }
            Err(err) => {
                self.lista.set(ListState::Failed(err.to_string()));
                Err(err)
            }
        }
    }
}
