//! DTOs serializables para definir coches y reportar su estado.

pub mod car_dto;
