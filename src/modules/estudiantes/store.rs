use std::sync::Arc;

use tokio::sync::watch;

use cobro_models::{Estudiante, EstudianteFiltro};

use crate::error::ServiceError;
use crate::modules::estudiantes::EstudianteService;
use crate::store::{ListState, ListStore};

/// Holds the student list the console currently displays.
#[derive(Clone)]
pub struct EstudianteStore {
    pub service: EstudianteService,
    lista: Arc<ListStore<Estudiante>>,
}

impl EstudianteStore {
    pub fn new(service: EstudianteService) -> Self {
        Self {
            service,
            lista: Arc::new(ListStore::new()),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> ListState<Estudiante> {
        self.lista.get()
    }

    /// Observes transitions as loads complete.
    pub fn subscribe(&self) -> watch::Receiver<ListState<Estudiante>> {
        self.lista.subscribe()
    }

    /// Reloads the list, publishing `Loading` first and then the outcome.
    pub async fn cargar(
        &self,
        filtro: &EstudianteFiltro,
    ) -> Result<Arc<Vec<Estudiante>>, ServiceError> {
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
