pub mod dispatch_status;
pub mod order_status;
pub mod payment_status;
pub mod shipment_status;

pub use dispatch_status::DispatchStatus;
pub use order_status::OrderStatus;
pub use payment_status::PaymentStatus;
pub use shipment_status::ShipmentStatus;
