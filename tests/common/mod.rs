//! Shared in-process stub of the remote billing API.
//!
//! Each integration test boots this axum server on an ephemeral port and
//! points a real `ApiClient` at it, so repositories, mappers, stores and
//! the dashboard cache are exercised over actual HTTP, envelope included.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use cobro_client::ApiClient;
use cobro_config::ApiConfig;

/// Server-side dataset plus the counters tests assert on.
///
/// Rows are stored as raw JSON so tests control the exact wire shape,
/// malformed fields included.
pub struct StubState {
    pub estudiantes: Mutex<Vec<Value>>,
    pub adeudos: Mutex<Vec<Value>>,
    pub conceptos: Mutex<Vec<Value>>,
    pub pagos: Mutex<Vec<Value>>,
    pub grupos: Mutex<Vec<Value>>,
    pub ciclos: Mutex<Vec<Value>>,
    pub usuarios: Mutex<Vec<Value>>,
    pub resumen: Mutex<Value>,
    pub last_estudiantes_query: Mutex<Option<HashMap<String, String>>>,
    pub last_adeudos_query: Mutex<Option<HashMap<String, String>>>,
    pub last_pagos_query: Mutex<Option<HashMap<String, String>>>,
    pub last_generar_body: Mutex<Option<Value>>,
    pub dashboard_hits: AtomicU32,
    /// Remaining dashboard requests to answer with a bare 503.
    pub dashboard_failures: AtomicU32,
}

impl StubState {
    fn new() -> Self {
        Self {
            estudiantes: Mutex::new(Vec::new()),
            adeudos: Mutex::new(Vec::new()),
            conceptos: Mutex::new(Vec::new()),
            pagos: Mutex::new(Vec::new()),
            grupos: Mutex::new(Vec::new()),
            ciclos: Mutex::new(Vec::new()),
            usuarios: Mutex::new(Vec::new()),
            resumen: Mutex::new(resumen_json()),
            last_estudiantes_query: Mutex::new(None),
            last_adeudos_query: Mutex::new(None),
            last_pagos_query: Mutex::new(None),
            last_generar_body: Mutex::new(None),
            dashboard_hits: AtomicU32::new(0),
            dashboard_failures: AtomicU32::new(0),
        }
    }
}

/// Handle to a running stub server.
pub struct StubApi {
    pub state: Arc<StubState>,
    pub base_url: String,
}

impl StubApi {
    /// Boots the stub on an ephemeral port.
    pub async fn start() -> Self {
        let state = Arc::new(StubState::new());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(Arc::clone(&state));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            state,
            base_url: format!("http://{addr}/api"),
        }
    }

    /// An `ApiConfig` pointed at this stub, for full `AppState` wiring.
    pub fn config(&self) -> ApiConfig {
        ApiConfig::with_base_url(self.base_url.clone())
    }

    /// A client pointed at this stub.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config())
    }

    pub fn seed_estudiantes(&self, rows: Vec<Value>) {
        *self.state.estudiantes.lock().unwrap() = rows;
    }

    pub fn seed_adeudos(&self, rows: Vec<Value>) {
        *self.state.adeudos.lock().unwrap() = rows;
    }

    pub fn seed_conceptos(&self, rows: Vec<Value>) {
        *self.state.conceptos.lock().unwrap() = rows;
    }

    pub fn seed_pagos(&self, rows: Vec<Value>) {
        *self.state.pagos.lock().unwrap() = rows;
    }

    pub fn seed_grupos(&self, rows: Vec<Value>) {
        *self.state.grupos.lock().unwrap() = rows;
    }

    pub fn seed_ciclos(&self, rows: Vec<Value>) {
        *self.state.ciclos.lock().unwrap() = rows;
    }

    pub fn seed_usuarios(&self, rows: Vec<Value>) {
        *self.state.usuarios.lock().unwrap() = rows;
    }

    pub fn set_resumen(&self, resumen: Value) {
        *self.state.resumen.lock().unwrap() = resumen;
    }

    /// Makes the next `times` dashboard requests answer a bare 503.
    pub fn fail_dashboard(&self, times: u32) {
        self.state.dashboard_failures.store(times, Ordering::SeqCst);
    }

    pub fn dashboard_hits(&self) -> u32 {
        self.state.dashboard_hits.load(Ordering::SeqCst)
    }

    pub fn last_estudiantes_query(&self) -> Option<HashMap<String, String>> {
        self.state.last_estudiantes_query.lock().unwrap().clone()
    }

    pub fn last_adeudos_query(&self) -> Option<HashMap<String, String>> {
        self.state.last_adeudos_query.lock().unwrap().clone()
    }

    pub fn last_pagos_query(&self) -> Option<HashMap<String, String>> {
        self.state.last_pagos_query.lock().unwrap().clone()
    }

    pub fn last_generar_body(&self) -> Option<Value> {
        self.state.last_generar_body.lock().unwrap().clone()
    }
}

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route(
            "/api/estudiantes",
            get(listar_estudiantes).post(crear_estudiante),
        )
        .route(
            "/api/estudiantes/{id}",
            get(obtener_estudiante)
                .put(actualizar_estudiante)
                .delete(eliminar_estudiante),
        )
        .route("/api/adeudos", get(listar_adeudos))
        .route("/api/adeudos/generar", post(generar_adeudos))
        .route("/api/adeudos/{id}", get(obtener_adeudo))
        .route("/api/conceptos", get(listar_conceptos).post(crear_concepto))
        .route("/api/pagos", get(listar_pagos).post(crear_pago))
        .route("/api/grupos", get(listar_grupos).post(crear_grupo))
        .route("/api/grupos/{id}", get(obtener_grupo))
        .route("/api/ciclos-escolares", get(listar_ciclos).post(crear_ciclo))
        .route("/api/usuarios", get(listar_usuarios).post(crear_usuario))
        .route("/api/niveles", get(listar_niveles))
        .route("/api/modalidades", get(listar_modalidades))
        .route("/api/dashboard/resumen", get(dashboard_resumen))
        .with_state(state)
}

/// A successful envelope around `data`.
fn ok(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

/// A successful, message-only envelope.
fn mensaje(text: &str) -> Json<Value> {
    Json(json!({ "success": true, "message": text }))
}

/// A rejection envelope with the given status.
fn rechazo(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

async fn listar_estudiantes(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    *state.last_estudiantes_query.lock().unwrap() = Some(params.clone());
    let rows = state.estudiantes.lock().unwrap();
    let filtradas: Vec<Value> = rows
        .iter()
        .filter(|row| {
            params.get("nivel").map_or(true, |n| row["nivel"] == n.as_str())
                && params
                    .get("activo")
                    .map_or(true, |a| row["activo"].to_string() == *a)
        })
        .cloned()
        .collect();
    ok(Value::Array(filtradas))
}

async fn obtener_estudiante(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
) -> Response {
    let rows = state.estudiantes.lock().unwrap();
    match rows.iter().find(|row| row["id"] == id) {
        Some(row) => ok(row.clone()).into_response(),
        None => rechazo(StatusCode::NOT_FOUND, "estudiante no encontrado"),
    }
}

async fn crear_estudiante(
    State(state): State<Arc<StubState>>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut rows = state.estudiantes.lock().unwrap();
    if rows.iter().any(|row| row["curp"] == body["curp"]) {
        return rechazo(StatusCode::UNPROCESSABLE_ENTITY, "curp duplicada");
    }
    body["id"] = json!(rows.len() as i64 + 1);
    body["activo"] = json!(true);
    rows.push(body.clone());
    ok(body).into_response()
}

async fn actualizar_estudiante(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut rows = state.estudiantes.lock().unwrap();
    match rows.iter_mut().find(|row| row["id"] == id) {
        Some(row) => {
            if let (Some(destino), Some(cambios)) = (row.as_object_mut(), body.as_object()) {
                for (campo, valor) in cambios {
                    destino.insert(campo.clone(), valor.clone());
                }
            }
            ok(row.clone()).into_response()
        }
        None => rechazo(StatusCode::NOT_FOUND, "estudiante no encontrado"),
    }
}

async fn eliminar_estudiante(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
) -> Response {
    let mut rows = state.estudiantes.lock().unwrap();
    let antes = rows.len();
    rows.retain(|row| row["id"] != id);
    if rows.len() == antes {
        return rechazo(StatusCode::NOT_FOUND, "estudiante no encontrado");
    }
    mensaje("estudiante eliminado").into_response()
}

async fn listar_adeudos(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    *state.last_adeudos_query.lock().unwrap() = Some(params.clone());
    let rows = state.adeudos.lock().unwrap();
    let filtradas: Vec<Value> = rows
        .iter()
        .filter(|row| {
            params
                .get("estudiante_id")
                .map_or(true, |id| row["estudiante"]["id"].to_string() == *id)
                && params
                    .get("estado")
                    .map_or(true, |estado| row["estado"] == estado.as_str())
        })
        .cloned()
        .collect();
    ok(Value::Array(filtradas))
}

async fn obtener_adeudo(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> Response {
    let rows = state.adeudos.lock().unwrap();
    match rows.iter().find(|row| row["id"] == id) {
        Some(row) => ok(row.clone()).into_response(),
        None => rechazo(StatusCode::NOT_FOUND, "adeudo no encontrado"),
    }
}

async fn generar_adeudos(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    *state.last_generar_body.lock().unwrap() = Some(body);
    mensaje("12 adeudos generados")
}

async fn listar_conceptos(State(state): State<Arc<StubState>>) -> Json<Value> {
    ok(Value::Array(state.conceptos.lock().unwrap().clone()))
}

async fn crear_concepto(
    State(state): State<Arc<StubState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let mut rows = state.conceptos.lock().unwrap();
    body["id"] = json!(rows.len() as i64 + 1);
    rows.push(body.clone());
    ok(body)
}

async fn listar_pagos(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    *state.last_pagos_query.lock().unwrap() = Some(params.clone());
    let rows = state.pagos.lock().unwrap();
    let filtradas: Vec<Value> = rows
        .iter()
        .filter(|row| {
            params
                .get("estudiante_id")
                .map_or(true, |id| row["estudiante_id"].to_string() == *id)
        })
        .cloned()
        .collect();
    ok(Value::Array(filtradas))
}

async fn crear_pago(
    State(state): State<Arc<StubState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let mut rows = state.pagos.lock().unwrap();
    body["id"] = json!(rows.len() as i64 + 1);
    rows.push(body.clone());
    ok(body)
}

async fn listar_grupos(State(state): State<Arc<StubState>>) -> Json<Value> {
    ok(Value::Array(state.grupos.lock().unwrap().clone()))
}

async fn obtener_grupo(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> Response {
    let rows = state.grupos.lock().unwrap();
    match rows.iter().find(|row| row["id"] == id) {
        Some(row) => ok(row.clone()).into_response(),
        None => rechazo(StatusCode::NOT_FOUND, "grupo no encontrado"),
    }
}

async fn crear_grupo(
    State(state): State<Arc<StubState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let mut rows = state.grupos.lock().unwrap();
    body["id"] = json!(rows.len() as i64 + 1);
    rows.push(body.clone());
    ok(body)
}

async fn listar_ciclos(State(state): State<Arc<StubState>>) -> Json<Value> {
    ok(Value::Array(state.ciclos.lock().unwrap().clone()))
}

async fn crear_ciclo(
    State(state): State<Arc<StubState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let mut rows = state.ciclos.lock().unwrap();
    body["id"] = json!(rows.len() as i64 + 1);
    body["activo"] = json!(false);
    rows.push(body.clone());
    ok(body)
}

async fn listar_usuarios(State(state): State<Arc<StubState>>) -> Json<Value> {
    ok(Value::Array(state.usuarios.lock().unwrap().clone()))
}

async fn crear_usuario(
    State(state): State<Arc<StubState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let mut rows = state.usuarios.lock().unwrap();
    body["id"] = json!(rows.len() as i64 + 1);
    body["activo"] = json!(true);
    rows.push(body.clone());
    ok(body)
}

async fn listar_niveles() -> Json<Value> {
    ok(json!([
        { "id": 1, "nombre": "preescolar" },
        { "id": 2, "nombre": "primaria" },
        { "id": 3, "nombre": "secundaria" },
        { "id": 4, "nombre": "bachillerato" },
        { "id": 5, "nombre": "bachillerato_sabatino" }
    ]))
}

async fn listar_modalidades() -> Json<Value> {
    ok(json!([
        { "id": 1, "nombre": "presencial" },
        { "id": 2, "nombre": "en_linea" }
    ]))
}

async fn dashboard_resumen(State(state): State<Arc<StubState>>) -> Response {
    state.dashboard_hits.fetch_add(1, Ordering::SeqCst);
    let pendientes = state.dashboard_failures.load(Ordering::SeqCst);
    if pendientes > 0 {
        state.dashboard_failures.store(pendientes - 1, Ordering::SeqCst);
        // A bare 503, not an envelope: the client must classify it as a
        // retryable status error.
        return (StatusCode::SERVICE_UNAVAILABLE, "service unavailable").into_response();
    }
    ok(state.resumen.lock().unwrap().clone()).into_response()
}

/// A complete student row as the API returns it. The CURP is derived from
/// the id so seeded rows never collide.
pub fn estudiante_json(id: i64, nombre: &str) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "apellido_paterno": "Gómez",
        "apellido_materno": "Mora",
        "curp": format!("GOMC9005{:02}HDFMRL08", id % 100),
        "nivel": "primaria",
        "modalidad": "presencial",
        "grado": "3",
        "activo": true,
        "grupo": { "id": 4, "nombre": "3-A" }
    })
}

pub fn grupo_json(id: i64, nombre: &str) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "nivel": "primaria",
        "modalidad": "presencial",
        "grado": "3",
        "ciclo_escolar_id": 2
    })
}

pub fn concepto_json(id: i64, nombre: &str, costo: &str) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "tipo": "adeudo",
        "periodo": "mensual",
        "nivel": "primaria",
        "modalidad": "presencial",
        "costo": costo
    })
}

pub fn pago_json(id: i64, estudiante_id: i64, monto: &str) -> Value {
    json!({
        "id": id,
        "estudiante_id": estudiante_id,
        "folio": format!("REC-{id:06}"),
        "metodo": "efectivo",
        "monto": monto,
        "fecha": "2026-03-06"
    })
}

/// A debt row with its nested concept and student.
pub fn adeudo_json(id: i64, estudiante_id: i64, estado: &str) -> Value {
    json!({
        "id": id,
        "concepto": concepto_json(11, "Colegiatura", "1500.00"),
        "estudiante": estudiante_json(estudiante_id, "Carlos"),
        "estado": estado,
        "pendiente": "1500.00",
        "pagado": "0.00",
        "total": "1500.00",
        "fecha_inicio": "2026-01-15T00:00:00Z",
        "fecha_vencimiento": "2026-02-15T00:00:00Z"
    })
}

pub fn ciclo_json(id: i64, nombre: &str, activo: bool) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "fecha_inicio": "2025-08-25",
        "fecha_fin": "2026-07-15",
        "activo": activo
    })
}

pub fn usuario_json(id: i64, nombre: &str) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "email": format!("usuario{id}@cobro.mx"),
        "rol": "admin",
        "activo": true
    })
}

pub fn resumen_json() -> Value {
    json!({
        "total_estudiantes": 420,
        "estudiantes_activos": 395,
        "total_adeudos": 1310,
        "adeudos_pendientes": 600,
        "adeudos_pagados": 650,
        "adeudos_vencidos": 60,
        "monto_total": "1965000.00",
        "monto_pagado": "975000.00",
        "monto_pendiente": "990000.00",
        "pagos_mes": "182500.50"
    })
}
