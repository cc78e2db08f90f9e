mod create_network;
mod delete_network;
mod update_network;
mod verify_network;

pub use create_network::CreateNetworkUseCase;
pub use delete_network::DeleteNetworkUseCase;
pub use update_network::UpdateNetworkUseCase;
pub use verify_network::VerifyNetworkUseCase;
