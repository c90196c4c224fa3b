//! Selección de tarifas y defaults de moneda
//!
//! El tramo aplicable a una orden es la tarifa diaria activa con el
//! min_period más alto que no supere rental_days. Los tramos no llevan
//! cota superior: el siguiente min_period de la lista la implica.

use crate::models::tarif::{PeriodType, Tarif};

/// Seleccionar el tramo que cubre rental_days
///
/// Candidatas: tarifas activas de tipo día con min_period <= rental_days.
/// De ellas gana la de min_period mayor; a igualdad, la primera de la
/// lista (orden de repositorio: min_period ascendente).
pub fn select_bracket(tarifs: &[Tarif], rental_days: i32) -> Option<&Tarif> {
    tarifs
        .iter()
        .filter(|t| t.active && t.period_type == PeriodType::Day && t.min_period <= rental_days)
        .max_by_key(|t| t.min_period)
}

/// Moneda de la tarifa: la indicada, o la de la oficina si no se indicó
pub fn default_currency(requested: Option<String>, office_currency: &str) -> String {
    requested.unwrap_or_else(|| office_currency.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn tarif(min_period: i32, period_type: PeriodType, active: bool) -> Tarif {
        Tarif {
            id: Uuid::new_v4(),
            office_id: Uuid::new_v4(),
            vehicle_model_id: Uuid::new_v4(),
            period_type,
            min_period,
            price_per_unit: Decimal::from(50),
            currency: "EUR".to_string(),
            active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_select_bracket_picks_highest_matching_min_period() {
        let tarifs = vec![
            tarif(1, PeriodType::Day, true),
            tarif(3, PeriodType::Day, true),
            tarif(7, PeriodType::Day, true),
        ];

        assert_eq!(select_bracket(&tarifs, 1).unwrap().min_period, 1);
        assert_eq!(select_bracket(&tarifs, 2).unwrap().min_period, 1);
        assert_eq!(select_bracket(&tarifs, 3).unwrap().min_period, 3);
        assert_eq!(select_bracket(&tarifs, 10).unwrap().min_period, 7);
    }

    #[test]
    fn test_select_bracket_without_match() {
        let tarifs = vec![tarif(3, PeriodType::Day, true)];
        assert!(select_bracket(&tarifs, 2).is_none());
        assert!(select_bracket(&[], 5).is_none());
    }

    #[test]
    fn test_select_bracket_ignores_hourly_and_inactive() {
        let tarifs = vec![
            tarif(1, PeriodType::Hour, true),
            tarif(2, PeriodType::Day, false),
        ];
        assert!(select_bracket(&tarifs, 5).is_none());
    }

    #[test]
    fn test_default_currency_from_office() {
        assert_eq!(default_currency(None, "EUR"), "EUR");
        assert_eq!(default_currency(Some("USD".to_string()), "EUR"), "USD");
    }
}
