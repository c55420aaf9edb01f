//! Infrastructure layer: stores and mappers behind the handler abstractions.

pub mod memory;
pub mod receipt_mapper;


pub use memory::InMemoryRepository;
pub use receipt_mapper::SystemReceiptMapper;
