pub mod device_location_provider;
pub mod http_shift_repository;
pub mod static_location_provider;
pub mod static_permission_gateway;
pub mod static_shift_repository;
pub mod system_permission_gateway;

pub use device_location_provider::DeviceLocationProvider;
pub use http_shift_repository::HttpShiftRepository;
pub use static_location_provider::StaticLocationProvider;
pub use static_permission_gateway::StaticPermissionGateway;
pub use static_shift_repository::StaticShiftRepository;
pub use system_permission_gateway::SystemPermissionGateway;
