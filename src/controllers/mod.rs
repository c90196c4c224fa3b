//! Controllers del sistema
//!
//! Orquestan cada operación: validan la entrada, cargan estado desde los
//! repositorios, aplican las reglas de negocio de services y mapean a DTOs.

pub mod maintenance_controller;
pub mod office_controller;
pub mod rental_order_controller;
pub mod service_type_controller;
pub mod tarif_controller;
pub mod vehicle_controller;
