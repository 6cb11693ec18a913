pub mod ports;

#[allow(unused_imports)]
pub use ports::FakeSui;
#[allow(unused_imports)]
pub use ports::MockPrompter;
