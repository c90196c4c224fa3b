//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod maintenance;
pub mod office;
pub mod rental_order;
pub mod service_type;
pub mod tarif;
pub mod vehicle;
