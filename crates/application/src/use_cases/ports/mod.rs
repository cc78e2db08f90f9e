mod create_port;
mod delete_port;
mod verify_port;

pub use create_port::{CreatePortUseCase, CreatedPort};
pub use delete_port::DeletePortUseCase;
pub use verify_port::VerifyPortUseCase;
