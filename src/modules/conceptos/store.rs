use std::sync::Arc;

use tokio::sync::watch;

use cobro_models::Concepto;

use crate::error::ServiceError;
use crate::modules::conceptos::ConceptoService;
use crate::store::{ListState, ListStore};

/// Holds the fee-concept list the console currently displays.
#[derive(Clone)]
pub struct ConceptoStore {
    pub service: ConceptoService,
    lista: Arc<ListStore<Concepto>>,
}

impl ConceptoStore {
    pub fn new(service: ConceptoService) -> Self {
        Self {
            service,
            lista: Arc::new(ListStore::new()),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> ListState<Concepto> {
        self.lista.get()
    }

    /// Observes transitions as loads complete.
    pub fn subscribe(&self) -> watch::Receiver<ListState<Concepto>> {
        self.lista.subscribe()
    }

    /// Reloads the list, publishing `Loading` first and then the outcome.
    pub async fn cargar(&self) -> Result<Arc<Vec<Concepto>>, ServiceError> {
        self.lista.set(ListState::Loading);
        match self.service.listar().await {
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
