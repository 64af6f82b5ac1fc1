//! Static grade lookup per education level.
//!
//! Grade numbers are not a value object: they are a fixed table consulted to
//! populate selection dropdowns and to bound validation during bulk import.
//! Preschool runs three grades, primary six, secondary three, and both
//! high-school tracks are organized in six semesters.

use std::ops::RangeInclusive;

use crate::value_types::{ClosedEnum, Nivel, NivelFiltro};

/// A grade option for selection UI: wire value plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradoOpcion {
    /// Wire value, e.g. `"3"`.
    pub value: String,
    /// Display label, e.g. `"3°"`.
    pub label: String,
}

impl GradoOpcion {
    fn new(numero: u8) -> Self {
        Self {
            value: numero.to_string(),
            label: format!("{numero}°"),
        }
    }
}

/// Valid grade numbers for one education level.
fn rango(nivel: Nivel) -> RangeInclusive<u8> {
    match nivel {
        Nivel::Preescolar => 1..=3,
        Nivel::Primaria => 1..=6,
        Nivel::Secundaria => 1..=3,
        Nivel::Bachillerato => 1..=6,
        Nivel::BachilleratoSabatino => 1..=6,
    }
}

/// Grade options for one level, in ascending order.
pub fn grados_por_nivel(nivel: Nivel) -> Vec<GradoOpcion> {
    rango(nivel).map(GradoOpcion::new).collect()
}

/// De-duplicated, sorted union of grade options across every level.
///
/// Backs the `general` filter context, where no single level constrains the
/// dropdown.
pub fn todos_los_grados() -> Vec<GradoOpcion> {
    let mut numeros: Vec<u8> = Nivel::ALL.iter().flat_map(|nivel| rango(*nivel)).collect();
    numeros.sort_unstable();
    numeros.dedup();
    numeros.into_iter().map(GradoOpcion::new).collect()
}

/// Grade options for a level filter, answering `General` with the union.
pub fn grados_para_filtro(filtro: NivelFiltro) -> Vec<GradoOpcion> {
    match filtro {
        NivelFiltro::General => todos_los_grados(),
        NivelFiltro::Solo(nivel) => grados_por_nivel(nivel),
    }
}

/// Whether a wire-format grade string is valid for the given level.
pub fn grado_valido(nivel: Nivel, grado: &str) -> bool {
    grado
        .trim()
        .parse::<u8>()
        .map(|numero| rango(nivel).contains(&numero))
        .unwrap_or(false)
}
