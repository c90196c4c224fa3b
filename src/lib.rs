//! Backend de gestión de alquiler de vehículos
//!
//! API REST sobre Axum y PostgreSQL: oficinas, flota, tarifas por tramo,
//! órdenes de alquiler y mantenimiento de vehículos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
