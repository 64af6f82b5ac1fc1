//! Closed-enumeration value objects for domain classifiers.
//!
//! The remote API transmits classifiers (debt status, education level,
//! instruction mode, billing period) as lower-case snake_case codes. Each is
//! modeled as an enum implementing [`ClosedEnum`]; the ones the upstream is
//! known to emit malformed additionally implement [`LenientEnum`], which
//! substitutes a fixed default instead of failing.
//!
//! # Example
//!
//! ```ignore
//! use cobro_models::value_types::{ClosedEnum, Estado, LenientEnum};
//!
//! let estado = Estado::parse("Pendiente")?;      // strict, case-insensitive
//! assert_eq!(estado.as_str(), "pendiente");
//!
//! let fallback = Estado::from_raw("archivado");  // lenient
//! assert_eq!(fallback, Estado::Pendiente);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cobro_core::errors::InvalidEnumValue;

/// A closed set of lower-case wire codes with localized display labels.
///
/// Strict construction goes through [`ClosedEnum::parse`], which normalizes
/// case and fails with [`InvalidEnumValue`] for anything outside the set. No
/// instance can exist holding an out-of-set code.
pub trait ClosedEnum: Sized + Copy + Eq + 'static {
    /// Enumeration name used in error messages (`"estado"`, `"nivel"`, ...).
    const KIND: &'static str;

    /// Every member, in canonical order.
    const ALL: &'static [Self];

    /// Canonical lower-case wire code.
    fn as_str(&self) -> &'static str;

    /// Localized label for display.
    fn display_value(&self) -> &'static str;

    /// Strict construction: trims, lower-cases, and matches the closed set.
    fn parse(raw: &str) -> Result<Self, InvalidEnumValue> {
        let normalized = raw.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str() == normalized)
            .ok_or_else(|| InvalidEnumValue::new(Self::KIND, raw))
    }

    /// `(value, display)` pairs for populating selection UI.
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL
            .iter()
            .map(|member| (member.as_str(), member.display_value()))
            .collect()
    }
}

/// Default-on-invalid policy for enumerations mapped leniently.
///
/// The upstream API sometimes emits missing or blank codes inside nested
/// records; treating those as hard errors would block entire list views, so
/// these types fall back to a fixed member instead.
pub trait LenientEnum: ClosedEnum {
    /// Member substituted when the raw input does not match.
    const FALLBACK: Self;

    /// Lenient construction: never fails.
    fn from_raw(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::FALLBACK)
    }

    /// Lenient construction over an optional wire field.
    fn from_raw_opt(raw: Option<&str>) -> Self {
        raw.map(Self::from_raw).unwrap_or(Self::FALLBACK)
    }
}

// ============================================================================
// Estado
// ============================================================================

/// Settlement status of a debt record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estado {
    Pendiente,
    Pagado,
    Vencido,
}

impl ClosedEnum for Estado {
    const KIND: &'static str = "estado";
    const ALL: &'static [Estado] = &[Estado::Pendiente, Estado::Pagado, Estado::Vencido];

    fn as_str(&self) -> &'static str {
        match self {
            Estado::Pendiente => "pendiente",
            Estado::Pagado => "pagado",
            Estado::Vencido => "vencido",
        }
    }

    fn display_value(&self) -> &'static str {
        match self {
            Estado::Pendiente => "Pendiente",
            Estado::Pagado => "Pagado",
            Estado::Vencido => "Vencido",
        }
    }
}

impl LenientEnum for Estado {
    const FALLBACK: Estado = Estado::Pendiente;
}

impl Estado {
    /// Presentation hint for status badges.
    pub fn color_class(&self) -> &'static str {
        match self {
            Estado::Pendiente => "warning",
            Estado::Pagado => "success",
            Estado::Vencido => "danger",
        }
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

impl FromStr for Estado {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Nivel
// ============================================================================

/// Education level of a student, group, or fee concept.
///
/// The administrative pseudo-level `general` is deliberately not a member;
/// it only exists as a filter sentinel (see [`NivelFiltro`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nivel {
    Preescolar,
    Primaria,
    Secundaria,
    Bachillerato,
    BachilleratoSabatino,
}

impl ClosedEnum for Nivel {
    const KIND: &'static str = "nivel";
    const ALL: &'static [Nivel] = &[
        Nivel::Preescolar,
        Nivel::Primaria,
        Nivel::Secundaria,
        Nivel::Bachillerato,
        Nivel::BachilleratoSabatino,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Nivel::Preescolar => "preescolar",
            Nivel::Primaria => "primaria",
            Nivel::Secundaria => "secundaria",
            Nivel::Bachillerato => "bachillerato",
            Nivel::BachilleratoSabatino => "bachillerato_sabatino",
        }
    }

    fn display_value(&self) -> &'static str {
        match self {
            Nivel::Preescolar => "Preescolar",
            Nivel::Primaria => "Primaria",
            Nivel::Secundaria => "Secundaria",
            Nivel::Bachillerato => "Bachillerato",
            Nivel::BachilleratoSabatino => "Bachillerato Sabatino",
        }
    }
}

impl LenientEnum for Nivel {
    const FALLBACK: Nivel = Nivel::Preescolar;
}

impl fmt::Display for Nivel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

impl FromStr for Nivel {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Modalidad
// ============================================================================

/// Instruction mode: on-site or online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modalidad {
    Presencial,
    EnLinea,
}

impl ClosedEnum for Modalidad {
    const KIND: &'static str = "modalidad";
    const ALL: &'static [Modalidad] = &[Modalidad::Presencial, Modalidad::EnLinea];

    fn as_str(&self) -> &'static str {
        match self {
            Modalidad::Presencial => "presencial",
            Modalidad::EnLinea => "en_linea",
        }
    }

    fn display_value(&self) -> &'static str {
        match self {
            Modalidad::Presencial => "Presencial",
            Modalidad::EnLinea => "En Línea",
        }
    }
}

impl LenientEnum for Modalidad {
    const FALLBACK: Modalidad = Modalidad::Presencial;
}

impl fmt::Display for Modalidad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

impl FromStr for Modalidad {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Periodo
// ============================================================================

/// Billing cadence of a fee concept.
///
/// Strict-only: there is no [`LenientEnum`] implementation. A fee definition
/// with an unknown cadence must never silently default to another one, so
/// invalid input is always a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Periodo {
    PagoUnico,
    Mensual,
    Semestral,
}

impl ClosedEnum for Periodo {
    const KIND: &'static str = "periodo";
    const ALL: &'static [Periodo] = &[Periodo::PagoUnico, Periodo::Mensual, Periodo::Semestral];

    fn as_str(&self) -> &'static str {
        match self {
            Periodo::PagoUnico => "pago_unico",
            Periodo::Mensual => "mensual",
            Periodo::Semestral => "semestral",
        }
    }

    fn display_value(&self) -> &'static str {
        match self {
            Periodo::PagoUnico => "Pago Único",
            Periodo::Mensual => "Mensual",
            Periodo::Semestral => "Semestral",
        }
    }
}

impl fmt::Display for Periodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

impl FromStr for Periodo {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// NivelFiltro
// ============================================================================

/// Level filter for listing screens.
///
/// `General` is the administrative pseudo-level: it constrains nothing and
/// spans every grade. It never appears inside a domain entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NivelFiltro {
    #[default]
    General,
    Solo(Nivel),
}

impl NivelFiltro {
    /// Parses either `"general"` or a strict [`Nivel`] code.
    pub fn parse(raw: &str) -> Result<Self, InvalidEnumValue> {
        if raw.trim().eq_ignore_ascii_case("general") {
            return Ok(NivelFiltro::General);
        }
        Nivel::parse(raw).map(NivelFiltro::Solo)
    }

    /// Query-parameter value: `None` for `General` (no constraint).
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            NivelFiltro::General => None,
            NivelFiltro::Solo(nivel) => Some(nivel.as_str()),
        }
    }
}

impl fmt::Display for NivelFiltro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NivelFiltro::General => write!(f, "General"),
            NivelFiltro::Solo(nivel) => write!(f, "{nivel}"),
        }
    }
}

impl FromStr for NivelFiltro {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
