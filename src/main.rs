use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;

use cobro::logging::init_logging;
use cobro::state::AppState;
use cobro_cli::seeder::{SeedConfig, seed_api};
use cobro_config::ApiConfig;
use cobro_models::{
    AdeudoFiltro, CicloEscolarId, Estado, EstudianteFiltro, EstudianteId, GenerarAdeudosRequest,
    Modalidad, Nivel, NivelFiltro, PagoFiltro, modalidad_id_por_codigo, nivel_id_por_codigo,
};

#[derive(Parser)]
#[command(name = "cobro")]
#[command(about = "Cobro - school billing administration console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the financial dashboard snapshot
    Dashboard {
        /// Bypass the cache and fetch a fresh snapshot
        #[arg(long)]
        refresh: bool,
    },
    /// List students
    Estudiantes {
        /// Level code (e.g. primaria); omit for every level
        #[arg(long)]
        nivel: Option<Nivel>,
        /// Mode code (presencial | en_linea)
        #[arg(long)]
        modalidad: Option<Modalidad>,
        /// Only active students
        #[arg(long)]
        activos: bool,
    },
    /// List debts
    Adeudos {
        /// Student id
        #[arg(short, long)]
        estudiante: Option<i64>,
        /// Settlement status (pendiente | pagado | vencido)
        #[arg(long)]
        estado: Option<Estado>,
    },
    /// List fee concepts
    Conceptos,
    /// List payments
    Pagos {
        /// Student id
        #[arg(short, long)]
        estudiante: Option<i64>,
    },
    /// List enrollment groups
    Grupos,
    /// List academic cycles
    Ciclos,
    /// List console accounts
    Usuarios,
    /// Generate debts for every active student of one cycle, level and mode
    GenerarAdeudos {
        /// Academic cycle id
        #[arg(long)]
        ciclo: i64,
        /// Level code
        #[arg(long)]
        nivel: Nivel,
        /// Mode code
        #[arg(long)]
        modalidad: Modalidad,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Seed the API with fake records
    Seed {
        /// Number of groups to create
        #[arg(long, default_value = "6")]
        grupos: usize,
        /// Number of students to create
        #[arg(long, default_value = "40")]
        estudiantes: usize,
        /// Number of fee concepts to create
        #[arg(long, default_value = "5")]
        conceptos: usize,
        /// Number of payments to create
        #[arg(long, default_value = "25")]
        pagos: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let state = AppState::init(ApiConfig::from_env());

    match cli.command {
        Commands::Dashboard { refresh } => mostrar_dashboard(&state, refresh).await,
        Commands::Estudiantes {
            nivel,
            modalidad,
            activos,
        } => listar_estudiantes(&state, nivel, modalidad, activos).await,
        Commands::Adeudos { estudiante, estado } => listar_adeudos(&state, estudiante, estado).await,
        Commands::Conceptos => listar_conceptos(&state).await,
        Commands::Pagos { estudiante } => listar_pagos(&state, estudiante).await,
        Commands::Grupos => listar_grupos(&state).await,
        Commands::Ciclos => listar_ciclos(&state).await,
        Commands::Usuarios => listar_usuarios(&state).await,
        Commands::GenerarAdeudos {
            ciclo,
            nivel,
            modalidad,
            yes,
        } => generar_adeudos(&state, ciclo, nivel, modalidad, yes).await,
        Commands::Seed {
            grupos,
            estudiantes,
            conceptos,
            pagos,
        } => {
            let config = SeedConfig {
                grupos,
                estudiantes,
                conceptos,
                pagos,
            };
            seed_api(&state.client, &config).await?;
            Ok(())
        }
    }
}

async fn mostrar_dashboard(state: &AppState, refresh: bool) -> anyhow::Result<()> {
    let resumen = if refresh {
        state.dashboard.refresh().await?
    } else {
        state.dashboard.get().await?
    };

    println!("Resumen financiero");
    println!(
        "  Estudiantes      {:>12}   ({} activos)",
        resumen.total_estudiantes, resumen.estudiantes_activos
    );
    println!(
        "  Adeudos          {:>12}   ({} pendientes / {} pagados / {} vencidos)",
        resumen.total_adeudos,
        resumen.adeudos_pendientes,
        resumen.adeudos_pagados,
        resumen.adeudos_vencidos
    );
    println!("  Monto total      {:>12}", resumen.monto_total.to_string());
    println!(
        "  Monto pagado     {:>12}",
        resumen.monto_pagado.to_string()
    );
    println!(
        "  Monto pendiente  {:>12}",
        resumen.monto_pendiente.to_string()
    );
    println!("  Pagos del mes    {:>12}", resumen.pagos_mes.to_string());
    Ok(())
}

async fn listar_estudiantes(
    state: &AppState,
    nivel: Option<Nivel>,
    modalidad: Option<Modalidad>,
    activos: bool,
) -> anyhow::Result<()> {
    let filtro = EstudianteFiltro {
        nivel: nivel.map_or(NivelFiltro::General, NivelFiltro::Solo),
        modalidad,
        activo: activos.then_some(true),
        grupo_id: None,
    };
    let filas = state.estudiantes.cargar(&filtro).await?;
    if filas.is_empty() {
        println!("Sin registros.");
        return Ok(());
    }

    println!(
        "{:<6} {:<34} {:<20} {:<22} {:<6} {}",
        "Id", "Nombre", "CURP", "Nivel", "Grado", "Grupo"
    );
    for e in filas.iter() {
        println!(
            "{:<6} {:<34} {:<20} {:<22} {:<6} {}",
            e.id.to_string(),
            e.nombre_completo(),
            e.curp.to_string(),
            e.nivel.to_string(),
            e.grado,
            e.grupo.as_ref().map_or("-", |g| g.nombre.as_str()),
        );
    }
    println!("\n{} estudiante(s)", filas.len());
    Ok(())
}

async fn listar_adeudos(
    state: &AppState,
    estudiante: Option<i64>,
    estado: Option<Estado>,
) -> anyhow::Result<()> {
    let filtro = AdeudoFiltro {
        estudiante_id: estudiante.map(EstudianteId::new),
        estado,
    };
    let filas = state.adeudos.cargar(&filtro).await?;
    if filas.is_empty() {
        println!("Sin registros.");
        return Ok(());
    }

    println!(
        "{:<6} {:<26} {:<32} {:<10} {:>12} {:>12}  {}",
        "Id", "Concepto", "Estudiante", "Estado", "Pendiente", "Pagado", "Vence"
    );
    for a in filas.iter() {
        println!(
            "{:<6} {:<26} {:<32} {:<10} {:>12} {:>12}  {}",
            a.id.to_string(),
            a.concepto.nombre,
            a.estudiante.nombre_completo(),
            a.estado.to_string(),
            a.monto_pendiente.to_string(),
            a.monto_pagado.to_string(),
            a.fecha_vencimiento,
        );
    }
    println!("\n{} adeudo(s)", filas.len());
    Ok(())
}

async fn listar_conceptos(state: &AppState) -> anyhow::Result<()> {
    let filas = state.conceptos.cargar().await?;
    if filas.is_empty() {
        println!("Sin registros.");
        return Ok(());
    }

    println!(
        "{:<6} {:<30} {:<10} {:<12} {:<22} {:<12} {:>12}",
        "Id", "Nombre", "Tipo", "Periodo", "Nivel", "Modalidad", "Costo"
    );
    for c in filas.iter() {
        println!(
            "{:<6} {:<30} {:<10} {:<12} {:<22} {:<12} {:>12}",
            c.id.to_string(),
            c.nombre,
            c.tipo.to_string(),
            c.periodo.to_string(),
            c.nivel.map_or("General".to_string(), |n| n.to_string()),
            c.modalidad.map_or("General".to_string(), |m| m.to_string()),
            c.costo.to_string(),
        );
    }
    println!("\n{} concepto(s)", filas.len());
    Ok(())
}

async fn listar_pagos(state: &AppState, estudiante: Option<i64>) -> anyhow::Result<()> {
    let filtro = PagoFiltro {
        estudiante_id: estudiante.map(EstudianteId::new),
    };
    let filas = state.pagos.cargar(&filtro).await?;
    if filas.is_empty() {
        println!("Sin registros.");
        return Ok(());
    }

    println!(
        "{:<6} {:<16} {:<12} {:<14} {:>12}  {}",
        "Id", "Folio", "Estudiante", "Método", "Monto", "Fecha"
    );
    for p in filas.iter() {
        println!(
            "{:<6} {:<16} {:<12} {:<14} {:>12}  {}",
            p.id.to_string(),
            p.folio,
            p.estudiante_id.to_string(),
            p.metodo.to_string(),
            p.monto.to_string(),
            p.fecha,
        );
    }
    println!("\n{} pago(s)", filas.len());
    Ok(())
}

async fn listar_grupos(state: &AppState) -> anyhow::Result<()> {
    let filas = state.grupos.cargar().await?;
    if filas.is_empty() {
        println!("Sin registros.");
        return Ok(());
    }

    println!(
        "{:<6} {:<24} {:<22} {:<12} {:<6} {}",
        "Id", "Nombre", "Nivel", "Modalidad", "Grado", "Ciclo"
    );
    for g in filas.iter() {
        println!(
            "{:<6} {:<24} {:<22} {:<12} {:<6} {}",
            g.id.to_string(),
            g.nombre,
            g.nivel.to_string(),
            g.modalidad.to_string(),
            g.grado,
            g.ciclo_escolar_id
                .map_or("-".to_string(), |id| id.to_string()),
        );
    }
    println!("\n{} grupo(s)", filas.len());
    Ok(())
}

async fn listar_ciclos(state: &AppState) -> anyhow::Result<()> {
    let filas = state.ciclos_escolares.cargar().await?;
    if filas.is_empty() {
        println!("Sin registros.");
        return Ok(());
    }

    println!(
        "{:<6} {:<16} {:<12} {:<12} {}",
        "Id", "Nombre", "Inicio", "Fin", "Activo"
    );
    for c in filas.iter() {
        println!(
            "{:<6} {:<16} {:<12} {:<12} {}",
            c.id.to_string(),
            c.nombre,
            c.fecha_inicio.to_string(),
            c.fecha_fin.to_string(),
            if c.activo { "sí" } else { "no" },
        );
    }
    println!("\n{} ciclo(s)", filas.len());
    Ok(())
}

async fn listar_usuarios(state: &AppState) -> anyhow::Result<()> {
    let filas = state.usuarios.cargar().await?;
    if filas.is_empty() {
        println!("Sin registros.");
        return Ok(());
    }

    println!(
        "{:<6} {:<28} {:<32} {:<12} {}",
        "Id", "Nombre", "Email", "Rol", "Activo"
    );
    for u in filas.iter() {
        println!(
            "{:<6} {:<28} {:<32} {:<12} {}",
            u.id.to_string(),
            u.nombre,
            u.email,
            u.rol,
            if u.activo { "sí" } else { "no" },
        );
    }
    println!("\n{} usuario(s)", filas.len());
    Ok(())
}

async fn generar_adeudos(
    state: &AppState,
    ciclo: i64,
    nivel: Nivel,
    modalidad: Modalidad,
    yes: bool,
) -> anyhow::Result<()> {
    let niveles = state.catalogos.niveles().await?;
    let modalidades = state.catalogos.modalidades().await?;

    let nivel_id = nivel_id_por_codigo(&niveles, nivel)
        .ok_or_else(|| anyhow::anyhow!("nivel {nivel} is not in the server catalog"))?;
    let modalidad_id = modalidad_id_por_codigo(&modalidades, modalidad)
        .ok_or_else(|| anyhow::anyhow!("modalidad {modalidad} is not in the server catalog"))?;

    let confirmado = yes
        || Confirm::new()
            .with_prompt(format!(
                "¿Generar adeudos para todos los estudiantes activos de {nivel} / {modalidad} en el ciclo {ciclo}?"
            ))
            .default(false)
            .interact()?;
    if !confirmado {
        println!("Cancelado.");
        return Ok(());
    }

    let request = GenerarAdeudosRequest {
        ciclo_escolar_id: CicloEscolarId::new(ciclo),
        modalidad_id,
        nivel_id,
    };
    let mensaje = state.adeudos.service.generar(&request).await?;
    println!("✅ {mensaje}");

    // The bulk generation just changed every dashboard number.
    state.dashboard.invalidate();
    Ok(())
}
