//! Student seeding.
//!
//! Provides functions for generating fake student records, each with a
//! well-formed CURP and a grade consistent with its group.

use std::time::Instant;

use cobro_client::EstudianteRepository;
use cobro_core::errors::ApiError;
use cobro_models::{CreateEstudianteDto, Estudiante, Grupo, Modalidad, Nivel};
use fake::Fake;
use fake::faker::name::en::*;
use rand::Rng;
use rayon::prelude::*;

/// Generates student data in parallel, assigning each student to one of
/// the given groups round-robin. With no groups, students are created
/// unassigned in first grade of primary.
pub fn generate_estudiantes(count: usize, grupos: &[Grupo]) -> Vec<CreateEstudianteDto> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let mut rng = rand::thread_rng();

            let nombre: String = FirstName().fake();
            let apellido_paterno: String = LastName().fake();
            let apellido_materno: String = LastName().fake();

            let grupo = grupos.get(idx % grupos.len().max(1));
            CreateEstudianteDto {
                nombre,
                apellido_paterno,
                apellido_materno,
                curp: curp_falsa(&mut rng),
                nivel: grupo.map_or(Nivel::Primaria, |g| g.nivel),
                modalidad: grupo.map_or(Modalidad::Presencial, |g| g.modalidad),
                grado: grupo.map_or_else(|| "1".to_string(), |g| g.grado.clone()),
                grupo_id: grupo.map(|g| g.id),
            }
        })
        .collect()
}

/// A random string matching the fixed CURP layout: four letters, six
/// birth-date digits, a sex marker, five letters, a homoclave, and a
/// check digit.
fn curp_falsa(rng: &mut impl Rng) -> String {
    let mut curp = String::with_capacity(18);
    for _ in 0..4 {
        curp.push(rng.gen_range(b'A'..=b'Z') as char);
    }

    // A plausible birth date; day capped at 28 so every month works.
    let anio = rng.gen_range(0..=15u8);
    let mes = rng.gen_range(1..=12u8);
    let dia = rng.gen_range(1..=28u8);
    curp.push_str(&format!("{anio:02}{mes:02}{dia:02}"));

    curp.push(if rng.gen_bool(0.5) { 'H' } else { 'M' });
    for _ in 0..5 {
        curp.push(rng.gen_range(b'A'..=b'Z') as char);
    }
    curp.push(rng.gen_range(b'A'..=b'Z') as char);
    curp.push(rng.gen_range(b'0'..=b'9') as char);
    curp
}

/// Creates students through the API, one request per student.
pub async fn seed_estudiantes(
    repo: &dyn EstudianteRepository,
    count: usize,
    grupos: &[Grupo],
) -> Result<Vec<Estudiante>, ApiError> {
    let start_time = Instant::now();
    println!("👥 Seeding {} estudiantes...", count);

    let dtos = generate_estudiantes(count, grupos);
    let mut creados = Vec::with_capacity(dtos.len());
    for dto in &dtos {
        creados.push(repo.crear(dto).await?);
    }

    println!(
        "   ✓ Created {} estudiantes in {:?}",
        creados.len(),
        start_time.elapsed()
    );

    Ok(creados)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cobro_models::{Curp, GrupoId, grado_valido};

    fn grupo(id: i64, nivel: Nivel, grado: &str) -> Grupo {
        Grupo {
            id: GrupoId::new(id),
            nombre: format!("{grado}-A"),
            nivel,
            modalidad: Modalidad::Presencial,
            grado: grado.to_string(),
            ciclo_escolar_id: None,
        }
    }

    #[test]
    fn generated_curps_are_well_formed() {
        for dto in generate_estudiantes(100, &[]) {
            assert!(
                Curp::new(&dto.curp).is_ok(),
                "CURP generada inválida: {}",
                dto.curp
            );
        }
    }

    #[test]
    fn students_inherit_level_grade_and_mode_from_their_group() {
        let grupos = vec![
            grupo(1, Nivel::Secundaria, "2"),
            grupo(2, Nivel::Preescolar, "3"),
        ];
        let dtos = generate_estudiantes(10, &grupos);
        for (idx, dto) in dtos.iter().enumerate() {
            let esperado = &grupos[idx % grupos.len()];
            assert_eq!(dto.nivel, esperado.nivel);
            assert_eq!(dto.grado, esperado.grado);
            assert_eq!(dto.grupo_id, Some(esperado.id));
            assert!(grado_valido(dto.nivel, &dto.grado));
        }
    }

    #[test]
    fn without_groups_students_default_to_first_grade_primary() {
        let dtos = generate_estudiantes(3, &[]);
        for dto in &dtos {
            assert_eq!(dto.nivel, Nivel::Primaria);
            assert_eq!(dto.grado, "1");
            assert_eq!(dto.grupo_id, None);
        }
    }
}
