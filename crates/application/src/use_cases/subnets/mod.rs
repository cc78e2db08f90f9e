mod create_subnet;
mod verify_subnet;

pub use create_subnet::CreateSubnetUseCase;
pub use verify_subnet::VerifySubnetUseCase;
