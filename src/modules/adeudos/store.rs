use std::sync::Arc;

use tokio::sync::watch;

use cobro_models::{Adeudo, AdeudoFiltro};

use crate::error::ServiceError;
use crate::modules::adeudos::AdeudoService;
use crate::store::{ListState, ListStore};

/// Holds the debt list the console currently displays.
#[derive(Clone)]
pub struct AdeudoStore {
    pub service: AdeudoService,
    lista: Arc<ListStore<Adeudo>>,
}

impl AdeudoStore {
    pub fn new(service: AdeudoService) -> Self {
        Self {
            service,
            lista: Arc::new(ListStore::new()),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> ListState<Adeudo> {
        self.lista.get()
    }

    /// Observes transitions as loads complete.
    pub fn subscribe(&self) -> watch::Receiver<ListState<Adeudo>> {
        self.lista.subscribe()
    }

    /// Reloads the list, publishing `Loading` first and then the outcome.
    pub async fn cargar(&self, filtro: &AdeudoFiltro) -> Result<Arc<Vec<Adeudo>>, ServiceError> {
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
