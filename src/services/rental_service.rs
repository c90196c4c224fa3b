//! Reglas del ciclo de vida de las órdenes de alquiler
//!
//! Campos derivados (end_date, total_amount) y precondiciones de las
//! transiciones start/end/cancel. Las operaciones por lote comprueban
//! el lote completo antes de mutar nada: todo-o-nada por llamada.

use chrono::{DateTime, Duration, Timelike, Utc};
use rust_decimal::Decimal;

use crate::models::rental_order::{RentalOrder, RentalOrderState};
use crate::utils::errors::{AppError, AppResult};

/// Fecha de fin derivada: start_date + rental_days días, con minutos,
/// segundos y fracción a cero (la hora se conserva). Sin start_date no
/// hay fecha de fin.
pub fn compute_end_date(
    start_date: Option<DateTime<Utc>>,
    rental_days: i32,
) -> Option<DateTime<Utc>> {
    let start = start_date?;
    let end = start + Duration::days(rental_days as i64);
    end.with_minute(0)
        .and_then(|d| d.with_second(0))
        .and_then(|d| d.with_nanosecond(0))
}

/// Importe total derivado: rental_days * price_per_unit + extra_expenses
pub fn compute_total_amount(
    rental_days: i32,
    price_per_unit: Decimal,
    extra_expenses: Decimal,
) -> Decimal {
    Decimal::from(rental_days) * price_per_unit + extra_expenses
}

/// Kilometraje del vehículo al cerrar la orden: nunca decrece
pub fn closing_vehicle_mileage(current_mileage: i32, end_mileage: i32) -> i32 {
    current_mileage.max(end_mileage)
}

/// Precondición de start: todas las órdenes del lote en draft
pub fn ensure_all_can_start(orders: &[RentalOrder]) -> AppResult<()> {
    for order in orders {
        if order.state != RentalOrderState::Draft {
            return Err(AppError::BadRequest(format!(
                "La orden {} no está en estado draft",
                order.id
            )));
        }
    }
    Ok(())
}

/// Precondición de end: todas las órdenes del lote activas
pub fn ensure_all_can_end(orders: &[RentalOrder]) -> AppResult<()> {
    for order in orders {
        if order.state != RentalOrderState::Active {
            return Err(AppError::BadRequest(format!(
                "Solo se puede finalizar una orden activa, la orden {} no lo está",
                order.id
            )));
        }
    }
    Ok(())
}

/// Precondición de cancel: solo draft o active se pueden cancelar
pub fn ensure_all_can_cancel(orders: &[RentalOrder]) -> AppResult<()> {
    for order in orders {
        if !matches!(
            order.state,
            RentalOrderState::Draft | RentalOrderState::Active
        ) {
            return Err(AppError::BadRequest(format!(
                "Solo se puede cancelar una orden en draft o activa, la orden {} no lo está",
                order.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn order_in_state(state: RentalOrderState) -> RentalOrder {
        RentalOrder {
            id: Uuid::new_v4(),
            office_id: None,
            vehicle_id: Uuid::new_v4(),
            tarif_id: Uuid::new_v4(),
            customer_name: "Test Customer".to_string(),
            rental_days: 3,
            start_date: Utc::now(),
            end_date: None,
            extra_expenses: Decimal::ZERO,
            start_mileage: 0,
            end_mileage: 0,
            total_amount: Decimal::ZERO,
            deposit_amount: Decimal::ZERO,
            currency: "EUR".to_string(),
            state,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_compute_end_date_truncates_minutes_and_seconds() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 15, 30, 45).unwrap();
        let end = compute_end_date(Some(start), 3).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 13, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_compute_end_date_without_start() {
        assert!(compute_end_date(None, 3).is_none());
    }

    #[test]
    fn test_compute_total_amount() {
        let total = compute_total_amount(3, Decimal::from(50), Decimal::from(20));
        assert_eq!(total, Decimal::from(170));
    }

    #[test]
    fn test_compute_total_amount_without_extras() {
        let total = compute_total_amount(7, Decimal::from(40), Decimal::ZERO);
        assert_eq!(total, Decimal::from(280));
    }

    #[test]
    fn test_closing_mileage_never_decreases() {
        assert_eq!(closing_vehicle_mileage(10_000, 10_350), 10_350);
        assert_eq!(closing_vehicle_mileage(10_000, 9_500), 10_000);
        assert_eq!(closing_vehicle_mileage(10_000, 10_000), 10_000);
    }

    #[test]
    fn test_start_requires_draft() {
        let orders = vec![order_in_state(RentalOrderState::Draft)];
        assert!(ensure_all_can_start(&orders).is_ok());

        for state in [
            RentalOrderState::Active,
            RentalOrderState::Done,
            RentalOrderState::Cancelled,
        ] {
            let orders = vec![order_in_state(state)];
            assert!(ensure_all_can_start(&orders).is_err());
        }
    }

    #[test]
    fn test_start_batch_is_all_or_nothing() {
        let orders = vec![
            order_in_state(RentalOrderState::Draft),
            order_in_state(RentalOrderState::Active),
        ];
        assert!(ensure_all_can_start(&orders).is_err());
    }

    #[test]
    fn test_end_requires_active() {
        let orders = vec![order_in_state(RentalOrderState::Active)];
        assert!(ensure_all_can_end(&orders).is_ok());

        for state in [
            RentalOrderState::Draft,
            RentalOrderState::Done,
            RentalOrderState::Cancelled,
        ] {
            let orders = vec![order_in_state(state)];
            assert!(ensure_all_can_end(&orders).is_err());
        }
    }

    #[test]
    fn test_cancel_requires_draft_or_active() {
        for state in [RentalOrderState::Draft, RentalOrderState::Active] {
            let orders = vec![order_in_state(state)];
            assert!(ensure_all_can_cancel(&orders).is_ok());
        }

        for state in [RentalOrderState::Done, RentalOrderState::Cancelled] {
            let orders = vec![order_in_state(state)];
            assert!(ensure_all_can_cancel(&orders).is_err());
        }
    }
}
