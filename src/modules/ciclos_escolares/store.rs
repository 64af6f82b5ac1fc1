use std::sync::Arc;

use tokio::sync::watch;

use cobro_models::CicloEscolar;

use crate::error::ServiceError;
use crate::modules::ciclos_escolares::CicloEscolarService;
use crate::store::{ListState, ListStore};

/// Holds the academic-cycle list.
#[derive(Clone)]
pub struct CicloEscolarStore {
    pub service: CicloEscolarService,
    lista: Arc<ListStore<CicloEscolar>>,
}

impl CicloEscolarStore {
    pub fn new(service: CicloEscolarService) -> Self {
        Self {
            service,
            lista: Arc::new(ListStore::new()),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> ListState<CicloEscolar> {
        self.lista.get()
    }

    /// Observes transitions as loads complete.
    pub fn subscribe(&self) -> watch::Receiver<ListState<CicloEscolar>> {
        self.lista.subscribe()
    }

    /// Reloads the list, publishing `Loading` first and then the outcome.
    pub async fn cargar(&self) -> Result<Arc<Vec<CicloEscolar>>, ServiceError> {
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
