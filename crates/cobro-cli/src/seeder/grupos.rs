//! Enrollment-group seeding.
//!
//! Provides functions for generating fake groups and creating them
//! through the billing API.

use std::time::Instant;

use cobro_client::GrupoRepository;
use cobro_core::errors::ApiError;
use cobro_models::{
    CicloEscolarId, ClosedEnum, CreateGrupoDto, Grupo, Modalidad, Nivel, grados_por_nivel,
};
use rand::Rng;
use rand::seq::SliceRandom;
use rayon::prelude::*;

const SECCIONES: [char; 4] = ['A', 'B', 'C', 'D'];

/// Generates group data in parallel using Rayon.
pub fn generate_grupos(count: usize, ciclo: CicloEscolarId) -> Vec<CreateGrupoDto> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let mut rng = rand::thread_rng();

            let nivel = Nivel::ALL
                .choose(&mut rng)
                .copied()
                .unwrap_or(Nivel::Primaria);
            let grados = grados_por_nivel(nivel);
            let grado = grados
                .choose(&mut rng)
                .map_or_else(|| "1".to_string(), |opcion| opcion.value.clone());
            // Most groups meet on campus, matching real enrollment.
            let modalidad = if rng.gen_bool(0.8) {
                Modalidad::Presencial
            } else {
                Modalidad::EnLinea
            };

            CreateGrupoDto {
                nombre: format!("{}-{}", grado, SECCIONES[idx % SECCIONES.len()]),
                nivel,
                modalidad,
                grado,
                ciclo_escolar_id: Some(ciclo),
            }
        })
        .collect()
}

/// Creates groups through the API, one request per group.
pub async fn seed_grupos(
    repo: &dyn GrupoRepository,
    count: usize,
    ciclo: CicloEscolarId,
) -> Result<Vec<Grupo>, ApiError> {
    let start_time = Instant::now();
    println!("📋 Seeding {} grupos...", count);

    let dtos = generate_grupos(count, ciclo);
    let mut creados = Vec::with_capacity(dtos.len());
    for dto in &dtos {
        creados.push(repo.crear(dto).await?);
    }

    println!(
        "   ✓ Created {} grupos in {:?}",
        creados.len(),
        start_time.elapsed()
    );

    Ok(creados)
}
