pub mod networks;
pub mod ports;
pub mod subnets;

pub use networks::{
    CreateNetworkUseCase, DeleteNetworkUseCase, UpdateNetworkUseCase, VerifyNetworkUseCase,
};
pub use ports::{CreatePortUseCase, CreatedPort, DeletePortUseCase, VerifyPortUseCase};
pub use subnets::{CreateSubnetUseCase, VerifySubnetUseCase};
