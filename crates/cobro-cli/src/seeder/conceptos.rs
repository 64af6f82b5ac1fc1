//! Fee-concept seeding.
//!
//! Provides functions for generating fake fee definitions spread across
//! billing periods and scopes.

use std::time::Instant;

use cobro_client::ConceptoRepository;
use cobro_core::errors::ApiError;
use cobro_models::{
    ClosedEnum, Concepto, CreateConceptoDto, Modalidad, Nivel, Periodo, TipoConcepto,
};
use rand::Rng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rust_decimal::Decimal;

const NOMBRES: [&str; 8] = [
    "Colegiatura",
    "Inscripción",
    "Material escolar",
    "Uniforme deportivo",
    "Examen extraordinario",
    "Seguro escolar",
    "Credencial",
    "Taller de cómputo",
];

/// Generates fee-concept data in parallel.
pub fn generate_conceptos(count: usize) -> Vec<CreateConceptoDto> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let mut rng = rand::thread_rng();

            let base = NOMBRES[idx % NOMBRES.len()];
            let nombre = if idx < NOMBRES.len() {
                base.to_string()
            } else {
                format!("{} {}", base, idx / NOMBRES.len() + 1)
            };

            let (tipo, periodo) = match rng.gen_range(0..3) {
                0 => (TipoConcepto::Adeudo, Periodo::Mensual),
                1 => (TipoConcepto::Adeudo, Periodo::Semestral),
                _ => (TipoConcepto::Requerido, Periodo::PagoUnico),
            };

            // Some concepts apply school-wide, others to one level or mode.
            let nivel = if rng.gen_bool(0.6) {
                Nivel::ALL.choose(&mut rng).copied()
            } else {
                None
            };
            let modalidad = if rng.gen_bool(0.3) {
                Modalidad::ALL.choose(&mut rng).copied()
            } else {
                None
            };

            CreateConceptoDto {
                nombre,
                tipo,
                periodo,
                nivel,
                modalidad,
                costo: Decimal::new(rng.gen_range(300..=4_500i64), 0),
            }
        })
        .collect()
}

/// Creates fee concepts through the API, one request per concept.
pub async fn seed_conceptos(
    repo: &dyn ConceptoRepository,
    count: usize,
) -> Result<Vec<Concepto>, ApiError> {
    let start_time = Instant::now();
    println!("🧾 Seeding {} conceptos...", count);

    let dtos = generate_conceptos(count);
    let mut creados = Vec::with_capacity(dtos.len());
    for dto in &dtos {
        creados.push(repo.crear(dto).await?);
    }

    println!(
        "   ✓ Created {} conceptos in {:?}",
        creados.len(),
        start_time.elapsed()
    );

    Ok(creados)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn generated_concepts_pass_dto_validation() {
        for dto in generate_conceptos(30) {
            assert!(dto.validate().is_ok(), "concepto inválido: {}", dto.nombre);
            assert!(dto.costo > Decimal::ZERO);
        }
    }

    #[test]
    fn names_stay_distinct_past_the_base_pool() {
        let dtos = generate_conceptos(20);
        assert_eq!(dtos[0].nombre, "Colegiatura");
        assert_eq!(dtos[8].nombre, "Colegiatura 2");
        assert_eq!(dtos[16].nombre, "Colegiatura 3");
    }

    #[test]
    fn single_payment_concepts_are_required_charges() {
        for dto in generate_conceptos(60) {
            if dto.periodo == Periodo::PagoUnico {
                assert_eq!(dto.tipo, TipoConcepto::Requerido);
            } else {
                assert_eq!(dto.tipo, TipoConcepto::Adeudo);
            }
        }
    }
}
