mod lea_gateway;

pub use lea_gateway::HttpLeaGateway;
