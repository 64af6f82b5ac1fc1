use std::sync::Arc;

use tokio::sync::watch;

use cobro_models::Grupo;

use crate::error::ServiceError;
use crate::modules::grupos::GrupoService;
use crate::store::{ListState, ListStore};

/// Holds the group list the console currently displays.
#[derive(Clone)]
pub struct GrupoStore {
    pub service: GrupoService,
    lista: Arc<ListStore<Grupo>>,
}

impl GrupoStore {
    pub fn new(service: GrupoService) -> Self {
        Self {
            service,
            lista: Arc::new(ListStore::new()),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> ListState<Grupo> {
        self.lista.get()
    }

    /// Observes transitions as loads complete.
    pub fn subscribe(&self) -> watch::Receiver<ListState<Grupo>> {
        self.lista.subscribe()
    }

    /// Reloads the list, publishing `Loading` first and then the outcome.
    pub async fn cargar(&self) -> Result<Arc<Vec<Grupo>>, ServiceError> {
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
