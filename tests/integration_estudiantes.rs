mod common;

use common::{StubApi, estudiante_json};

use cobro_client::{EstudianteRepository, HttpEstudianteRepository};
use cobro_core::ApiError;
use cobro_models::{
    CreateEstudianteDto, EstudianteFiltro, EstudianteId, Modalidad, Nivel, NivelFiltro,
    UpdateEstudianteDto,
};
use serde_json::json;

fn dto_valido() -> CreateEstudianteDto {
    CreateEstudianteDto {
        nombre: "Carlos".to_string(),
        apellido_paterno: "Gómez".to_string(),
        apellido_materno: "Mora".to_string(),
        curp: "GOMC900514HDFMRL09".to_string(),
        nivel: Nivel::Primaria,
        modalidad: Modalidad::Presencial,
        grado: "3".to_string(),
        grupo_id: None,
    }
}

#[tokio::test]
async fn test_listar_maps_every_row() {
    let stub = StubApi::start().await;
    stub.seed_estudiantes(vec![
        estudiante_json(1, "Carlos"),
        estudiante_json(2, "Lucía"),
    ]);
    let repo = HttpEstudianteRepository::new(stub.client());

    let estudiantes = repo.listar(&EstudianteFiltro::default()).await.unwrap();

    assert_eq!(estudiantes.len(), 2);
    assert_eq!(estudiantes[0].id, EstudianteId::new(1));
    assert_eq!(estudiantes[0].nivel, Nivel::Primaria);
    assert_eq!(estudiantes[0].nombre_completo(), "Gómez Mora Carlos");
    assert_eq!(estudiantes[1].nombre, "Lucía");
}

#[tokio::test]
async fn test_listar_sends_filter_params() {
    let stub = StubApi::start().await;
    let repo = HttpEstudianteRepository::new(stub.client());

    let filtro = EstudianteFiltro {
        nivel: NivelFiltro::Solo(Nivel::Secundaria),
        modalidad: Some(Modalidad::EnLinea),
        activo: Some(true),
        ..Default::default()
    };
    repo.listar(&filtro).await.unwrap();

    let query = stub.last_estudiantes_query().unwrap();
    assert_eq!(query.get("nivel").map(String::as_str), Some("secundaria"));
    assert_eq!(query.get("modalidad").map(String::as_str), Some("en_linea"));
    assert_eq!(query.get("activo").map(String::as_str), Some("true"));
}

#[tokio::test]
async fn test_listar_general_omits_the_nivel_param() {
    let stub = StubApi::start().await;
    let repo = HttpEstudianteRepository::new(stub.client());

    repo.listar(&EstudianteFiltro::default()).await.unwrap();

    assert!(stub.last_estudiantes_query().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_classifier_codes_fall_back_instead_of_failing_the_list() {
    let stub = StubApi::start().await;
    let mut roto = estudiante_json(1, "Ana");
    roto["nivel"] = json!("kinder");
    roto["modalidad"] = json!(null);
    stub.seed_estudiantes(vec![roto]);
    let repo = HttpEstudianteRepository::new(stub.client());

    let estudiantes = repo.listar(&EstudianteFiltro::default()).await.unwrap();

    assert_eq!(estudiantes.len(), 1);
    assert_eq!(estudiantes[0].nivel, Nivel::Preescolar);
    assert_eq!(estudiantes[0].modalidad, Modalidad::Presencial);
}

#[tokio::test]
async fn test_obtener_fetches_one_student() {
    let stub = StubApi::start().await;
    stub.seed_estudiantes(vec![
        estudiante_json(1, "Carlos"),
        estudiante_json(2, "Lucía"),
    ]);
    let repo = HttpEstudianteRepository::new(stub.client());

    let estudiante = repo.obtener(EstudianteId::new(2)).await.unwrap();

    assert_eq!(estudiante.nombre, "Lucía");
    assert_eq!(estudiante.grupo.as_ref().unwrap().nombre, "3-A");
}

#[tokio::test]
async fn test_obtener_missing_student_surfaces_the_rejection() {
    let stub = StubApi::start().await;
    let repo = HttpEstudianteRepository::new(stub.client());

    let err = repo.obtener(EstudianteId::new(99)).await.unwrap_err();

    assert!(!err.is_retryable());
    match err {
        ApiError::Rejected { message } => assert!(message.contains("no encontrado")),
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_crear_posts_wire_codes_and_maps_the_reply() {
    let stub = StubApi::start().await;
    let repo = HttpEstudianteRepository::new(stub.client());

    let creado = repo.crear(&dto_valido()).await.unwrap();

    assert_eq!(creado.id, EstudianteId::new(1));
    assert!(creado.activo);
    assert_eq!(creado.curp, *"GOMC900514HDFMRL09");

    let rows = stub.state.estudiantes.lock().unwrap();
    assert_eq!(rows[0]["nivel"], "primaria");
    assert_eq!(rows[0]["modalidad"], "presencial");
    // Absent optional fields never travel.
    assert!(rows[0].get("grupo_id").is_none());
}

#[tokio::test]
async fn test_crear_duplicate_curp_is_rejected() {
    let stub = StubApi::start().await;
    let repo = HttpEstudianteRepository::new(stub.client());

    repo.crear(&dto_valido()).await.unwrap();
    let err = repo.crear(&dto_valido()).await.unwrap_err();

    match err {
        ApiError::Rejected { message } => assert_eq!(message, "curp duplicada"),
        other => panic!("expected a rejection, got {other:?}"),
    }
    assert_eq!(stub.state.estudiantes.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_actualizar_merges_only_the_sent_fields() {
    let stub = StubApi::start().await;
    stub.seed_estudiantes(vec![estudiante_json(1, "Carlos")]);
    let repo = HttpEstudianteRepository::new(stub.client());

    let dto = UpdateEstudianteDto {
        activo: Some(false),
        ..Default::default()
    };
    let actualizado = repo.actualizar(EstudianteId::new(1), &dto).await.unwrap();

    assert!(!actualizado.activo);
    assert_eq!(actualizado.nombre, "Carlos");
}

#[tokio::test]
async fn test_eliminar_removes_the_row() {
    let stub = StubApi::start().await;
    stub.seed_estudiantes(vec![estudiante_json(1, "Carlos")]);
    let repo = HttpEstudianteRepository::new(stub.client());

    repo.eliminar(EstudianteId::new(1)).await.unwrap();
    assert!(stub.state.estudiantes.lock().unwrap().is_empty());

    let err = repo.eliminar(EstudianteId::new(1)).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { .. }));
}
