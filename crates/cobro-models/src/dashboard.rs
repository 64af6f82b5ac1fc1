//! Dashboard aggregate metrics and their wire mapping.

use rust_decimal::Decimal;
use serde::Deserialize;

use cobro_core::errors::MapError;
use cobro_core::parse::parse_decimal;

/// The aggregate financial snapshot shown on the dashboard.
///
/// Computed entirely server-side; the console caches one instance with a
/// short TTL (see the cache crate) and renders it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardResumen {
    pub total_estudiantes: i64,
    pub estudiantes_activos: i64,
    pub total_adeudos: i64,
    pub adeudos_pendientes: i64,
    pub adeudos_pagados: i64,
    pub adeudos_vencidos: i64,
    pub monto_total: Decimal,
    pub monto_pagado: Decimal,
    pub monto_pendiente: Decimal,
    /// Payments received in the current calendar month.
    pub pagos_mes: Decimal,
}

/// Wire shape of the dashboard snapshot. Counts travel as numbers, amounts
/// as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResumenResponse {
    pub total_estudiantes: i64,
    pub estudiantes_activos: i64,
    pub total_adeudos: i64,
    pub adeudos_pendientes: i64,
    pub adeudos_pagados: i64,
    pub adeudos_vencidos: i64,
    pub monto_total: String,
    pub monto_pagado: String,
    pub monto_pendiente: String,
    pub pagos_mes: String,
}

impl TryFrom<DashboardResumenResponse> for DashboardResumen {
    type Error = MapError;

    fn try_from(raw: DashboardResumenResponse) -> Result<Self, Self::Error> {
        Ok(DashboardResumen {
            total_estudiantes: raw.total_estudiantes,
            estudiantes_activos: raw.estudiantes_activos,
            total_adeudos: raw.total_adeudos,
            adeudos_pendientes: raw.adeudos_pendientes,
            adeudos_pagados: raw.adeudos_pagados,
            adeudos_vencidos: raw.adeudos_vencidos,
            monto_total: parse_decimal("monto_total", &raw.monto_total)?,
            monto_pagado: parse_decimal("monto_pagado", &raw.monto_pagado)?,
            monto_pendiente: parse_decimal("monto_pendiente", &raw.monto_pendiente)?,
            pagos_mes: parse_decimal("pagos_mes", &raw.pagos_mes)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_the_snapshot() {
        let raw: DashboardResumenResponse = serde_json::from_value(json!({
            "total_estudiantes": 420,
            "estudiantes_activos": 395,
            "total_adeudos": 1310,
            "adeudos_pendientes": 600,
            "adeudos_pagados": 650,
            "adeudos_vencidos": 60,
            "monto_total": "1965000.00",
            "monto_pagado": "975000.00",
            "monto_pendiente": "990000.00",
            "pagos_mes": "182500.50"
        }))
        .unwrap();

        let resumen = DashboardResumen::try_from(raw).unwrap();
        assert_eq!(resumen.total_estudiantes, 420);
        assert_eq!(resumen.adeudos_vencidos, 60);
        assert_eq!(resumen.pagos_mes, Decimal::new(18250050, 2));
    }

    #[test]
    fn malformed_amounts_name_the_field() {
        let raw: DashboardResumenResponse = serde_json::from_value(json!({
            "total_estudiantes": 1,
            "estudiantes_activos": 1,
            "total_adeudos": 0,
            "adeudos_pendientes": 0,
            "adeudos_pagados": 0,
            "adeudos_vencidos": 0,
            "monto_total": "--",
            "monto_pagado": "0.00",
            "monto_pendiente": "0.00",
            "pagos_mes": "0.00"
        }))
        .unwrap();

        match DashboardResumen::try_from(raw) {
            Err(MapError::Monto { field, .. }) => assert_eq!(field, "monto_total"),
            other => panic!("expected monto error, got {other:?}"),
        }
    }
}
