use std::sync::Arc;

use tokio::sync::watch;

use cobro_models::Usuario;

use crate::error::ServiceError;
use crate::modules::usuarios::UsuarioService;
use crate::store::{ListState, ListStore};

/// Holds the console-account list.
#[derive(Clone)]
pub struct UsuarioStore {
    pub service: UsuarioService,
    lista: Arc<ListStore<Usuario>>,
}

impl UsuarioStore {
    pub fn new(service: UsuarioService) -> Self {
        Self {
            service,
            lista: Arc::new(ListStore::new()),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> ListState<Usuario> {
        self.lista.get()
    }

    /// Observes transitions as loads complete.
    pub fn subscribe(&self) -> watch::Receiver<ListState<Usuario>> {
        self.lista.subscribe()
    }

    /// Reloads the list, publishing `Loading` first and then the outcome.
    pub async fn cargar(&self) -> Result<Arc<Vec<Usuario>>, ServiceError> {
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
