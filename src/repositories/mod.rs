pub mod maintenance_repository;
pub mod office_repository;
pub mod rental_order_repository;
pub mod service_type_repository;
pub mod tarif_repository;
pub mod vehicle_repository;
