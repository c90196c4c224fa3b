//! Reglas de mantenimiento
//!
//! Validación de kilometraje de los logs, suma de líneas de coste y
//! default del coste por tipo de servicio.

use rust_decimal::Decimal;

use crate::models::maintenance::MaintenanceCostLine;
use crate::utils::errors::{validation_error, AppResult};

/// Coste total derivado de un log: suma de los costes de sus líneas
pub fn sum_cost_lines(lines: &[MaintenanceCostLine]) -> Decimal {
    lines.iter().map(|line| line.cost).sum()
}

/// Validar el kilometraje de un log contra el vehículo
///
/// El kilometraje debe ser positivo y no puede quedar por debajo del
/// kilometraje actual del vehículo. Se comprueba en cada alta o
/// modificación del log.
pub fn validate_log_mileage(mileage: i32, vehicle_mileage: i32) -> AppResult<()> {
    if mileage <= 0 {
        return Err(validation_error(
            "mileage",
            "El kilometraje del servicio debe ser positivo",
        ));
    }
    if mileage < vehicle_mileage {
        return Err(validation_error(
            "mileage",
            "El kilometraje del servicio es menor que el kilometraje real del vehículo",
        ));
    }
    Ok(())
}

/// Coste de una línea: el indicado, o el coste por defecto del tipo de
/// servicio si no se indicó (sugerencia única, el usuario puede pisarla)
pub fn default_line_cost(requested: Option<Decimal>, service_default_cost: Decimal) -> Decimal {
    requested.unwrap_or(service_default_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn line(cost: Decimal) -> MaintenanceCostLine {
        MaintenanceCostLine {
            id: Uuid::new_v4(),
            log_id: Uuid::new_v4(),
            service_type_id: Uuid::new_v4(),
            cost,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sum_cost_lines() {
        let lines = vec![
            line(Decimal::from(120)),
            line(Decimal::from(35)),
            line(Decimal::new(1050, 2)),
        ];
        assert_eq!(sum_cost_lines(&lines), Decimal::new(16550, 2));
        assert_eq!(sum_cost_lines(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_validate_log_mileage() {
        // kilometraje cero o negativo
        assert!(validate_log_mileage(0, 0).is_err());
        assert!(validate_log_mileage(-10, 0).is_err());

        // por debajo del kilometraje real del vehículo
        assert!(validate_log_mileage(9_000, 10_000).is_err());

        // igual o por encima
        assert!(validate_log_mileage(10_000, 10_000).is_ok());
        assert!(validate_log_mileage(12_000, 10_000).is_ok());
    }

    #[test]
    fn test_default_line_cost() {
        assert_eq!(
            default_line_cost(None, Decimal::from(80)),
            Decimal::from(80)
        );
        assert_eq!(
            default_line_cost(Some(Decimal::from(95)), Decimal::from(80)),
            Decimal::from(95)
        );
    }
}
