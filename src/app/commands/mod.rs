pub mod deploy;
pub mod faucet;
pub mod publish;
pub mod status;
pub mod treasury;
pub mod verify;
