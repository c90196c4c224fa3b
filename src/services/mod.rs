//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: reglas
//! del ciclo de vida de las órdenes, selección de tarifas y validación
//! de mantenimiento. Son funciones puras sobre los modelos; los
//! controllers las invocan tras cargar el estado desde los repositorios.

pub mod maintenance_service;
pub mod rental_service;
pub mod tarif_service;
