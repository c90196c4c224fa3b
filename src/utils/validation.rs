//! Utilidades de validación
//!
//! Este módulo contiene los validadores de campo personalizados
//! que usan los DTOs de request.

use validator::ValidationError;

/// Validar formato de código de moneda (ISO 4217)
pub fn validate_currency_code(value: &str) -> Result<(), ValidationError> {
    if value.len() != 3 || !value.chars().all(|c| c.is_ascii_uppercase()) {
        let mut error = ValidationError::new("currency_code");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"3 uppercase letters".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    // Formato básico: XX-123-XX o similar
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("EUR").is_ok());
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("eur").is_err());
        assert!(validate_currency_code("EURO").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
    }
}
