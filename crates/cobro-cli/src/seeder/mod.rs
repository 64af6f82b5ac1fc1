//! API seeding orchestration.
//!
//! The seeder drives the same repository layer the console uses, so every
//! seeded record goes through the real DTO validation and response mapping.
//! Entities are created in dependency order: the academic cycle first, then
//! groups, students, fee concepts and payments.

pub mod conceptos;
pub mod estudiantes;
pub mod grupos;
pub mod models;
pub mod pagos;

pub use conceptos::{generate_conceptos, seed_conceptos};
pub use estudiantes::{generate_estudiantes, seed_estudiantes};
pub use grupos::{generate_grupos, seed_grupos};
pub use models::{SeedConfig, SeedReport};
pub use pagos::{generate_pagos, seed_pagos};

use std::time::Instant;

use chrono::{Datelike, NaiveDate, Utc};

use cobro_client::{
    ApiClient, CicloEscolarRepository, HttpCicloEscolarRepository, HttpConceptoRepository,
    HttpEstudianteRepository, HttpGrupoRepository, HttpPagoRepository,
};
use cobro_core::errors::ApiError;
use cobro_models::{CicloEscolar, CreateCicloEscolarDto};

/// Seeds the remote API with fake groups, students, concepts and payments.
///
/// Reuses the active academic cycle when the server already has one and
/// creates a cycle for the current school year otherwise. Stops at the
/// first request the API rejects.
pub async fn seed_api(client: &ApiClient, config: &SeedConfig) -> Result<SeedReport, ApiError> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} records against {}\n",
        config.total_registros(),
        client.base_url()
    );

    let ciclos = HttpCicloEscolarRepository::new(client.clone());
    let ciclo = ensure_ciclo(&ciclos).await?;
    println!("📅 Using ciclo escolar {} (id {})\n", ciclo.nombre, ciclo.id);

    let grupos_repo = HttpGrupoRepository::new(client.clone());
    let grupos = seed_grupos(&grupos_repo, config.grupos, ciclo.id).await?;

    let estudiantes_repo = HttpEstudianteRepository::new(client.clone());
    let estudiantes = seed_estudiantes(&estudiantes_repo, config.estudiantes, &grupos).await?;

    let conceptos_repo = HttpConceptoRepository::new(client.clone());
    let conceptos = seed_conceptos(&conceptos_repo, config.conceptos).await?;

    let pagos_repo = HttpPagoRepository::new(client.clone());
    let pagos = seed_pagos(&pagos_repo, config.pagos, &estudiantes).await?;

    let report = SeedReport {
        grupos: grupos.len(),
        estudiantes: estudiantes.len(),
        conceptos: conceptos.len(),
        pagos: pagos.len(),
    };

    println!("\n🎉 Seeding completed in {:?}", start_time.elapsed());
    println!("   Grupos:      {}", report.grupos);
    println!("   Estudiantes: {}", report.estudiantes);
    println!("   Conceptos:   {}", report.conceptos);
    println!("   Pagos:       {}", report.pagos);
    println!("   Total:       {}", report.total());

    Ok(report)
}

/// Picks the cycle new groups enroll into: the active one if the server has
/// one, otherwise the most recently started, otherwise a fresh cycle
/// spanning the current school year.
async fn ensure_ciclo(repo: &dyn CicloEscolarRepository) -> Result<CicloEscolar, ApiError> {
    let ciclos = repo.listar().await?;
    if let Some(activo) = ciclos.iter().find(|c| c.activo) {
        return Ok(activo.clone());
    }
    if let Some(reciente) = ciclos.into_iter().max_by_key(|c| c.fecha_inicio) {
        return Ok(reciente);
    }

    // School years run August through July.
    let hoy = Utc::now().date_naive();
    let anio = if hoy.month() >= 8 {
        hoy.year()
    } else {
        hoy.year() - 1
    };
    let dto = CreateCicloEscolarDto {
        nombre: format!("{}-{}", anio, anio + 1),
        fecha_inicio: NaiveDate::from_ymd_opt(anio, 8, 26).unwrap_or(hoy),
        fecha_fin: NaiveDate::from_ymd_opt(anio + 1, 7, 15).unwrap_or(hoy),
    };
    println!("📅 No ciclo escolar found, creating {}...", dto.nombre);
    repo.crear(&dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cobro_models::CicloEscolarId;
    use std::sync::Mutex;

    struct FakeCiclos {
        existentes: Vec<CicloEscolar>,
        creados: Mutex<Vec<CreateCicloEscolarDto>>,
    }

    impl FakeCiclos {
        fn with(existentes: Vec<CicloEscolar>) -> Self {
            Self {
                existentes,
                creados: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CicloEscolarRepository for FakeCiclos {
        async fn listar(&self) -> Result<Vec<CicloEscolar>, ApiError> {
            Ok(self.existentes.clone())
        }

        async fn crear(&self, dto: &CreateCicloEscolarDto) -> Result<CicloEscolar, ApiError> {
            self.creados.lock().unwrap().push(dto.clone());
            Ok(CicloEscolar {
                id: CicloEscolarId::new(99),
                nombre: dto.nombre.clone(),
                fecha_inicio: dto.fecha_inicio,
                fecha_fin: dto.fecha_fin,
                activo: false,
            })
        }
    }

    fn ciclo(id: i64, nombre: &str, inicio: (i32, u32, u32), activo: bool) -> CicloEscolar {
        let fecha_inicio = NaiveDate::from_ymd_opt(inicio.0, inicio.1, inicio.2).unwrap();
        CicloEscolar {
            id: CicloEscolarId::new(id),
            nombre: nombre.to_string(),
            fecha_inicio,
            fecha_fin: fecha_inicio + chrono::Duration::days(320),
            activo,
        }
    }

    #[tokio::test]
    async fn reuses_the_active_cycle() {
        let repo = FakeCiclos::with(vec![
            ciclo(1, "2023-2024", (2023, 8, 28), false),
            ciclo(2, "2024-2025", (2024, 8, 26), true),
        ]);

        let elegido = ensure_ciclo(&repo).await.unwrap();
        assert_eq!(elegido.id, CicloEscolarId::new(2));
        assert!(repo.creados.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn falls_back_to_the_most_recent_cycle() {
        let repo = FakeCiclos::with(vec![
            ciclo(1, "2023-2024", (2023, 8, 28), false),
            ciclo(2, "2024-2025", (2024, 8, 26), false),
        ]);

        let elegido = ensure_ciclo(&repo).await.unwrap();
        assert_eq!(elegido.nombre, "2024-2025");
    }

    #[tokio::test]
    async fn creates_a_cycle_when_the_server_has_none() {
        let repo = FakeCiclos::with(Vec::new());

        let creado = ensure_ciclo(&repo).await.unwrap();

        let creados = repo.creados.lock().unwrap();
        assert_eq!(creados.len(), 1);
        assert_eq!(creados[0].fecha_inicio.month(), 8);
        assert_eq!(
            creado.nombre,
            format!(
                "{}-{}",
                creados[0].fecha_inicio.year(),
                creados[0].fecha_inicio.year() + 1
            )
        );
    }
}
