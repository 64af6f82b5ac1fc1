//! Payment seeding.
//!
//! Provides functions for generating fake payment records against the
//! students a run has already created.

use std::time::Instant;

use chrono::{Duration, Utc};
use cobro_client::PagoRepository;
use cobro_core::errors::ApiError;
use cobro_models::{CreatePagoDto, Estudiante, EstudianteId, MetodoPago, Pago};
use rand::Rng;
use rayon::prelude::*;
use rust_decimal::Decimal;

/// Generates payment data in parallel, spreading payments round-robin
/// over the given students and backdating them up to ninety days.
pub fn generate_pagos(count: usize, estudiantes: &[Estudiante]) -> Vec<CreatePagoDto> {
    let hoy = Utc::now().date_naive();
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let mut rng = rand::thread_rng();

            let estudiante_id = estudiantes
                .get(idx % estudiantes.len().max(1))
                .map_or(EstudianteId::new(1), |e| e.id);

            CreatePagoDto {
                estudiante_id,
                folio: format!("SEM-{:06}", idx + 1),
                metodo: if rng.gen_bool(0.5) {
                    MetodoPago::Efectivo
                } else {
                    MetodoPago::Transferencia
                },
                // Whole peso amounts in centavos, 200.00 to 3500.00.
                monto: Decimal::new(rng.gen_range(200..=3_500i64) * 100, 2),
                fecha: hoy - Duration::days(rng.gen_range(0..90)),
                adeudo_ids: Vec::new(),
            }
        })
        .collect()
}

/// Creates payments through the API, one request per payment.
pub async fn seed_pagos(
    repo: &dyn PagoRepository,
    count: usize,
    estudiantes: &[Estudiante],
) -> Result<Vec<Pago>, ApiError> {
    let start_time = Instant::now();
    println!("💳 Seeding {} pagos...", count);

    let dtos = generate_pagos(count, estudiantes);
    let mut creados = Vec::with_capacity(dtos.len());
    for dto in &dtos {
        creados.push(repo.crear(dto).await?);
    }

    println!(
        "   ✓ Created {} pagos in {:?}",
        creados.len(),
        start_time.elapsed()
    );

    Ok(creados)
}
