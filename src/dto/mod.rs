pub mod maintenance_dto;
pub mod office_dto;
pub mod rental_order_dto;
pub mod service_type_dto;
pub mod tarif_dto;
pub mod vehicle_dto;
