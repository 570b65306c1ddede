mod schema;

pub use schema::{Device, DeviceDetail, FlashResponse, FunctionResponse, VariableResponse};
