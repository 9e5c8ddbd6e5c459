pub mod reserva_repository;

pub use reserva_repository::SeaOrmReservaRepository;
