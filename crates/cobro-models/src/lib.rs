//! # Cobro Models
//!
//! Domain entities, value objects, and wire mappers for the Cobro console.
//!
//! This crate owns every data structure that crosses the boundary between
//! the remote billing API and the console: the closed-enumeration value
//! objects, the typed wire-format response shapes, the `TryFrom` mappers
//! that convert them into domain entities, and the validated create/update
//! DTOs.
//!
//! # Modules
//!
//! - [`value_types`]: Estado / Nivel / Modalidad / Periodo classifiers
//! - [`curp`]: validated CURP newtype
//! - [`grados`]: static grade lookup per education level
//! - [`ids`]: strongly-typed integer id newtypes
//! - [`adeudos`]: debt records and the bulk-generation request
//! - [`conceptos`]: fee concepts
//! - [`estudiantes`]: student records
//! - [`pagos`]: payment records
//! - [`usuarios`]: console users
//! - [`grupos`]: enrollment groups
//! - [`ciclos_escolares`]: academic cycles
//! - [`catalogos`]: server-side classifier catalogs
//! - [`dashboard`]: aggregate metrics snapshot
//!
//! # Example
//!
//! ```ignore
//! use cobro_models::adeudos::{Adeudo, AdeudoResponse};
//! use cobro_models::value_types::{ClosedEnum, Estado};
//!
//! let raw: AdeudoResponse = serde_json::from_str(body)?;
//! let adeudo = Adeudo::try_from(raw)?;
//! assert_eq!(adeudo.estado, Estado::parse("pendiente")?);
//! ```

pub mod adeudos;
pub mod catalogos;
pub mod ciclos_escolares;
pub mod conceptos;
pub mod curp;
pub mod dashboard;
pub mod estudiantes;
pub mod grados;
pub mod grupos;
pub mod ids;
pub mod pagos;
pub mod usuarios;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use value_types::{
    ClosedEnum, Estado, LenientEnum, Modalidad, Nivel, NivelFiltro, Periodo,
};

pub use curp::{Curp, CurpInvalida, validar_curp};

pub use grados::{
    GradoOpcion, grado_valido, grados_para_filtro, grados_por_nivel, todos_los_grados,
};

pub use ids::{
    AdeudoId, CicloEscolarId, ConceptoId, EstudianteId, GrupoId, ModalidadId, NivelId, PagoId,
    UsuarioId,
};

pub use adeudos::{Adeudo, AdeudoFiltro, AdeudoResponse, GenerarAdeudosRequest};

pub use conceptos::{
    Concepto, ConceptoResponse, CreateConceptoDto, TipoConcepto, validar_monto_positivo,
};

pub use estudiantes::{
    CreateEstudianteDto, Estudiante, EstudianteFiltro, EstudianteResponse, UpdateEstudianteDto,
};

pub use pagos::{CreatePagoDto, MetodoPago, Pago, PagoFiltro, PagoResponse};

pub use usuarios::{CreateUsuarioDto, Usuario, UsuarioResponse};

pub use grupos::{CreateGrupoDto, Grupo, GrupoResponse, GrupoResumen, GrupoResumenResponse};

pub use ciclos_escolares::{CicloEscolar, CicloEscolarResponse, CreateCicloEscolarDto};

pub use catalogos::{
    CatalogoResponse, ModalidadCatalogo, NivelCatalogo, modalidad_id_por_codigo,
    nivel_id_por_codigo,
};

pub use dashboard::{DashboardResumen, DashboardResumenResponse};
